// pulse - bitdrift's observability proxy
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./resource_test.rs"]
mod resource_test;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResourceIdError {
  #[error("invalid resource id '{0}': expected 9 or 11 path segments, found {1}")]
  InvalidSegmentCount(String, usize),
}

//
// AzureResource
//

/// The addressable parts of an ARM resource ID. Resource group and name are lowercased since ARM
/// treats them case insensitively but is not consistent about the case it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureResource {
  pub subscription_id: String,
  pub resource_group: String,
  pub name: String,
}

impl AzureResource {
  /// Parses either of:
  /// `/subscriptions/SUBSCRIPTION_ID/resourceGroups/RESOURCE_GROUP/providers/PROVIDER/TYPE/NAME`
  /// `/subscriptions/SUBSCRIPTION_ID/resourceGroups/RESOURCE_GROUP/providers/PROVIDER/TYPE/NAME/TYPE/NAME`
  ///
  /// For the embedded form the name is that of the parent resource.
  pub fn from_id(id: &str) -> Result<Self, ResourceIdError> {
    let segments: Vec<&str> = id.split('/').collect();
    if segments.len() != 9 && segments.len() != 11 {
      return Err(ResourceIdError::InvalidSegmentCount(
        id.to_string(),
        segments.len(),
      ));
    }

    Ok(Self {
      subscription_id: segments[2].to_string(),
      resource_group: segments[4].to_lowercase(),
      name: segments[8].to_lowercase(),
    })
  }
}
