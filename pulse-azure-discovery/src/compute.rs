// pulse - bitdrift's observability proxy
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Descriptors returned by the Azure compute inventory API. These mirror the ARM JSON shapes and
//! keep every field optional, as the API omits whatever is not populated for a given resource.

#[cfg(test)]
#[path = "./compute_test.rs"]
mod compute_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

pub type Tags = BTreeMap<String, Option<String>>;

//
// ListPage
//

/// A single page of an ARM list response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
  #[serde(default = "Vec::new")]
  pub value: Vec<T>,
  pub next_link: Option<String>,
}

/// Decodes one page of a list response. Following `next_link` is left to the caller.
pub fn decode_page<T: DeserializeOwned>(body: &[u8]) -> anyhow::Result<ListPage<T>> {
  let page: ListPage<T> = serde_json::from_slice(body)?;
  log::debug!(
    "decoded {} compute descriptors, more pages: {}",
    page.value.len(),
    page.next_link.is_some()
  );
  Ok(page)
}

//
// VirtualMachine
//

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
  pub id: Option<String>,
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub resource_type: Option<String>,
  pub location: Option<String>,
  pub tags: Option<Tags>,
  pub properties: Option<VirtualMachineProperties>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineProperties {
  pub vm_id: Option<String>,
  pub storage_profile: Option<StorageProfile>,
  pub network_profile: Option<NetworkProfile>,
  pub instance_view: Option<VirtualMachineInstanceView>,
  pub provisioning_state: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceView {
  pub computer_name: Option<String>,
  pub os_name: Option<String>,
  pub statuses: Option<Vec<InstanceViewStatus>>,
}

//
// VirtualMachineScaleSet
//

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineScaleSet {
  pub id: Option<String>,
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub resource_type: Option<String>,
  pub location: Option<String>,
  pub tags: Option<Tags>,
}

//
// VirtualMachineScaleSetVm
//

/// A single instance within a scale set.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineScaleSetVm {
  pub id: Option<String>,
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub resource_type: Option<String>,
  pub location: Option<String>,
  pub instance_id: Option<String>,
  pub tags: Option<Tags>,
  pub properties: Option<VirtualMachineScaleSetVmProperties>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineScaleSetVmProperties {
  pub vm_id: Option<String>,
  pub latest_model_applied: Option<bool>,
  pub storage_profile: Option<StorageProfile>,
  pub network_profile: Option<NetworkProfile>,
  pub instance_view: Option<VirtualMachineScaleSetVmInstanceView>,
  pub provisioning_state: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineScaleSetVmInstanceView {
  pub platform_update_domain: Option<i32>,
  pub platform_fault_domain: Option<i32>,
  pub statuses: Option<Vec<InstanceViewStatus>>,
}

//
// Shared profiles
//

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
  pub os_disk: Option<OsDisk>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
  pub name: Option<String>,
  /// Either "Linux" or "Windows" when populated.
  pub os_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
  pub network_interfaces: Option<Vec<NetworkInterfaceReference>>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceReference {
  pub id: Option<String>,
  pub properties: Option<NetworkInterfaceReferenceProperties>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceReferenceProperties {
  pub primary: Option<bool>,
}

//
// InstanceViewStatus
//

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
  Info,
  Warning,
  Error,
  #[serde(other)]
  Unknown,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceViewStatus {
  /// Of the form `<Category>/<Value>`, e.g. `PowerState/running`.
  pub code: Option<String>,
  pub level: Option<StatusLevel>,
  pub display_status: Option<String>,
  pub message: Option<String>,
}
