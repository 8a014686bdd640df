// pulse - bitdrift's observability proxy
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

pub mod compute;
pub mod resource;
pub mod test;
pub mod vm;

use bd_log::SwapLogger;

#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  global_initialize();
}

pub fn global_initialize() {
  SwapLogger::initialize();
}
