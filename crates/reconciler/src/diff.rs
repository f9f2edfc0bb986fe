//! Pure change-group diff helpers.
//!
//! No side effects and no remote calls; used exclusively by the reconcile
//! loop.

use stratus_core::Attributes;

use crate::descriptor::ChangeGroup;

/// Check whether any named attribute differs between the last observed
/// state and the desired state.
///
/// An attribute absent from `desired` is "no requested change", never
/// "revert to default". An attribute present in `desired` but absent from
/// `previous` counts as a difference.
pub fn group_changed(previous: &Attributes, desired: &Attributes, attributes: &[&str]) -> bool {
    attributes.iter().any(|name| match desired.get(name) {
        Some(value) => previous.get(name) != Some(value),
        None => false,
    })
}

/// Assemble the group's full attribute set for its one remote call.
///
/// Desired values win; attributes the caller left out fall back to the
/// previously observed value, so a partial edit never blanks out sibling
/// fields. Attributes present in neither mapping are omitted.
pub fn group_values(previous: &Attributes, desired: &Attributes, group: &ChangeGroup) -> Attributes {
    group
        .attributes
        .iter()
        .filter_map(|name| {
            desired
                .get(name)
                .or_else(|| previous.get(name))
                .map(|value| ((*name).to_owned(), value.clone()))
        })
        .collect()
}
