//! The generic resource reconciliation engine.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use stratus_api::{
    interpret, interpret_describe, ApiRequest, RemoteClient, Verdict, RET_CODE_RESOURCE_NOT_FOUND,
};
use stratus_core::{AttrValue, Attributes, ResourceId, Zone};

use crate::descriptor::{ChangeGroup, IdStyle, IdentitySource, RemoteOp, ResourceDescriptor};
use crate::diff;
use crate::error::{Error, Result};

/// Drives one resource instance of one kind through its lifecycle.
///
/// The engine holds no state between calls; the caller owns the
/// reconciliation record (identity, zone, last observed snapshot) and
/// supplies the relevant pieces on every call. Remote calls within one
/// operation are strictly sequential.
pub struct Reconciler {
    /// Remote API seam.
    client: Arc<dyn RemoteClient>,
    /// Static table for the resource kind being driven.
    descriptor: &'static ResourceDescriptor,
}

impl Reconciler {
    /// Create an engine for one resource kind.
    pub fn new(client: Arc<dyn RemoteClient>, descriptor: &'static ResourceDescriptor) -> Self {
        Self { client, descriptor }
    }

    /// The descriptor this engine was built with.
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Allocate a new resource and return its remote-assigned identity.
    ///
    /// Exactly one remote call is issued, carrying every creation-time
    /// attribute the caller set plus the kind's fixed creation constants.
    /// On any failure no identity is assigned and no partial remote state is
    /// assumed to exist; the true state is unknown, so the caller should
    /// probe with [`refresh`](Self::refresh) rather than blindly retry - an
    /// allocate call is not idempotent and a blind retry can
    /// double-provision.
    ///
    /// # Errors
    ///
    /// [`Error::MissingAttribute`] / [`Error::Validation`] before any remote
    /// call; [`Error::Transport`] or [`Error::RemoteRejected`] from the call
    /// itself.
    pub async fn create(&self, zone: &Zone, desired: &Attributes) -> Result<ResourceId> {
        self.validate_create(desired)?;
        info!(kind = self.descriptor.kind, zone = %zone, "Creating resource");

        let mut request = ApiRequest::new(self.descriptor.create_action);
        for (name, value) in self.descriptor.create_constants {
            request.set_param(*name, value.to_json());
        }
        for spec in self.descriptor.schema {
            if spec.is_read_only() {
                continue;
            }
            if let Some(value) = desired.get(spec.name) {
                request.set_param(spec.wire, value.to_json());
            }
        }

        let response = self.client.call(zone, request).await?;
        match interpret(&response) {
            Verdict::Success(body) => {
                let id = self.created_identity(body)?;
                info!(kind = self.descriptor.kind, id = %id, "Created resource");
                Ok(id)
            }
            Verdict::Rejected { code, message } => Err(Error::remote_rejected(
                self.descriptor.create_action,
                code,
                message,
            )),
            Verdict::NotFound => Err(Error::remote_rejected(
                self.descriptor.create_action,
                RET_CODE_RESOURCE_NOT_FOUND,
                response.message.clone(),
            )),
        }
    }

    /// Fetch the current observed state of one identity.
    ///
    /// Fields the remote did not report are left unset rather than
    /// defaulted, so the caller can tell "not reported" from "explicitly
    /// empty". Read-only fields are populated here even though they never
    /// participate in diffing.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the identity matches nothing remotely (the
    /// caller should drop its record); [`Error::RemoteRejected`] or
    /// [`Error::Transport`] otherwise.
    pub async fn refresh(&self, zone: &Zone, id: &ResourceId) -> Result<Attributes> {
        debug!(kind = self.descriptor.kind, id = %id, "Refreshing resource");

        let request = self.op_request(&self.descriptor.describe, id);
        let response = self.client.call(zone, request).await?;
        match interpret_describe(&response, self.descriptor.result_set) {
            Verdict::Success(objects) => match objects.first().copied() {
                Some(object) => self.observe(object),
                None => Err(Error::not_found(self.descriptor.kind, id.clone())),
            },
            Verdict::NotFound => Err(Error::not_found(self.descriptor.kind, id.clone())),
            Verdict::Rejected { code, message } => Err(Error::remote_rejected(
                self.descriptor.describe.action,
                code,
                message,
            )),
        }
    }

    /// Bring the remote object into agreement with the desired state.
    ///
    /// Walks the change groups in declared order. A group whose attributes
    /// all match the previously observed state issues no call; a group with
    /// any difference issues exactly one call carrying the group's full
    /// attribute set (desired values first, previous values backfilling the
    /// rest). The first failing group stops the walk and surfaces its error;
    /// groups already applied stay applied - there is no rollback, because
    /// the remote API has no multi-group transaction primitive.
    ///
    /// When at least one group was applied, the observed state is refreshed
    /// once at the end and returned. When nothing differed, no remote call
    /// is issued at all and `previous` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Whatever the failing group's call produced ([`Error::Transport`],
    /// [`Error::RemoteRejected`], [`Error::NotFound`]), or the trailing
    /// refresh's error.
    pub async fn reconcile(
        &self,
        zone: &Zone,
        id: &ResourceId,
        previous: &Attributes,
        desired: &Attributes,
    ) -> Result<Attributes> {
        info!(kind = self.descriptor.kind, id = %id, "Starting reconciliation");

        let mut applied = 0usize;
        for group in self.descriptor.change_groups {
            if !diff::group_changed(previous, desired, group.attributes) {
                debug!(group = group.name, "Group unchanged, skipping");
                continue;
            }
            self.apply_group(zone, id, group, previous, desired).await?;
            applied += 1;
        }

        if applied == 0 {
            info!(kind = self.descriptor.kind, id = %id, "Resource converged, no calls issued");
            return Ok(previous.clone());
        }

        debug!(
            kind = self.descriptor.kind,
            id = %id,
            groups_applied = applied,
            "Changes applied, refreshing observed state"
        );
        self.refresh(zone, id).await
    }

    /// Release one identity.
    ///
    /// An already-absent resource counts as success: deletion is idempotent
    /// from the caller's point of view. Only a success authorizes the caller
    /// to discard its record.
    ///
    /// # Errors
    ///
    /// [`Error::RemoteRejected`] or [`Error::Transport`]; neither clears the
    /// caller's local record.
    pub async fn destroy(&self, zone: &Zone, id: &ResourceId) -> Result<()> {
        info!(kind = self.descriptor.kind, id = %id, "Releasing resource");

        let request = self.op_request(&self.descriptor.delete, id);
        let response = self.client.call(zone, request).await?;
        match interpret(&response) {
            Verdict::Success(_) => Ok(()),
            Verdict::NotFound => {
                debug!(kind = self.descriptor.kind, id = %id, "Resource already gone");
                Ok(())
            }
            Verdict::Rejected { code, message } => Err(Error::remote_rejected(
                self.descriptor.delete.action,
                code,
                message,
            )),
        }
    }

    /// Issue one group's operation with its full attribute set.
    async fn apply_group(
        &self,
        zone: &Zone,
        id: &ResourceId,
        group: &ChangeGroup,
        previous: &Attributes,
        desired: &Attributes,
    ) -> Result<()> {
        info!(
            group = group.name,
            action = group.op.action,
            "Applying group change"
        );

        let mut request = self.op_request(&group.op, id);
        let values = diff::group_values(previous, desired, group);
        for (name, value) in values.iter() {
            let Some(spec) = self.descriptor.attribute(name) else {
                continue;
            };
            request.set_param(spec.wire, value.to_json());
        }

        let response = self.client.call(zone, request).await?;
        match interpret(&response) {
            Verdict::Success(_) => Ok(()),
            Verdict::Rejected { code, message } => {
                Err(Error::remote_rejected(group.op.action, code, message))
            }
            Verdict::NotFound => Err(Error::not_found(self.descriptor.kind, id.clone())),
        }
    }

    /// Build a request for an identity-addressed operation.
    fn op_request(&self, op: &RemoteOp, id: &ResourceId) -> ApiRequest {
        let id_value = match op.id_style {
            IdStyle::List => Value::from(vec![id.as_str()]),
            IdStyle::Scalar => Value::from(id.as_str()),
        };
        ApiRequest::new(op.action).with_param(op.id_param, id_value)
    }

    /// Check the desired state against the schema before any remote call.
    fn validate_create(&self, desired: &Attributes) -> Result<()> {
        for spec in self.descriptor.required_attributes() {
            if !desired.contains(spec.name) {
                return Err(Error::missing_attribute(self.descriptor.kind, spec.name));
            }
        }
        for (name, _) in desired.iter() {
            match self.descriptor.attribute(name) {
                None => {
                    return Err(Error::validation(format!(
                        "unknown attribute '{name}' for {}",
                        self.descriptor.kind
                    )));
                }
                Some(spec) if spec.is_read_only() => {
                    return Err(Error::validation(format!(
                        "attribute '{name}' is assigned by the remote side and cannot be set"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Map one described object into observed state via the schema.
    fn observe(&self, object: &Value) -> Result<Attributes> {
        let fields = object
            .as_object()
            .ok_or_else(|| Error::transport("described object is not a JSON object"))?;

        let mut observed = Attributes::new();
        for spec in self.descriptor.schema {
            let Some(value) = fields.get(spec.wire) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let typed = AttrValue::from_json(value, spec.ty).map_err(|e| {
                Error::transport(format!("field '{}': {e}", spec.wire))
            })?;
            observed.set(spec.name, typed);
        }
        Ok(observed)
    }

    /// Extract the tracked identity from an allocate response payload.
    fn created_identity(&self, body: &Map<String, Value>) -> Result<ResourceId> {
        let ids: Vec<&str> = match self.descriptor.created_id {
            IdentitySource::StringList(field) => body
                .get(field)
                .and_then(Value::as_array)
                .map(|list| list.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default(),
            IdentitySource::Scalar(field) => {
                body.get(field).and_then(Value::as_str).into_iter().collect()
            }
            IdentitySource::ObjectList { field, id } => body
                .get(field)
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(|object| object.get(id).and_then(Value::as_str))
                        .collect()
                })
                .unwrap_or_default(),
        };

        let Some(first) = ids.first().copied().filter(|id| !id.is_empty()) else {
            return Err(Error::transport(format!(
                "'{}' response carries no created identity",
                self.descriptor.create_action
            )));
        };
        if ids.len() > 1 {
            warn!(
                kind = self.descriptor.kind,
                tracked = first,
                allocated = ids.len(),
                "Batch allocation, tracking first identity only"
            );
        }
        Ok(ResourceId::new(first))
    }
}
