//! Capability-table delegation between type descriptors
//!
//! A [`TypeDescriptor`] owns a table of named [`Callable`] capabilities and an
//! optional parent link. [`inherit`] sets that link: lookups that miss the
//! child's own table continue in the parent's, and instances of the child
//! report themselves as instances of every descriptor on the chain.
//! Construction logic is never shared; only the capability and type-check
//! layer is.

use crate::error::{BasisError, ErrorCode, Result};
use crate::value::{Callable, Mapping, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::debug;

/// Serializes parent-link changes so the cycle check and the write are one step
static LINK: Mutex<()> = Mutex::new(());

/// A named type with a capability table and a settable delegation link
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    capabilities: RwLock<BTreeMap<String, Callable>>,
    parent: RwLock<Option<Arc<TypeDescriptor>>>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            capabilities: RwLock::new(BTreeMap::new()),
            parent: RwLock::new(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register (or replace) a capability in this descriptor's own table
    pub fn define(&self, name: impl Into<String>, capability: Callable) {
        self.capabilities
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.into(), capability);
    }

    /// The descriptor lookups delegate to, if any
    pub fn parent(&self) -> Option<Arc<TypeDescriptor>> {
        self.parent
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Capability from this descriptor's own table only
    pub fn own_capability(&self, name: &str) -> Option<Callable> {
        self.capabilities
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned()
    }

    /// Resolve a capability through this descriptor and then its ancestors
    pub fn lookup(&self, name: &str) -> Option<Callable> {
        if let Some(found) = self.own_capability(name) {
            return Some(found);
        }
        let mut current = self.parent();
        while let Some(descriptor) = current {
            if let Some(found) = descriptor.own_capability(name) {
                return Some(found);
            }
            current = descriptor.parent();
        }
        None
    }

    /// Whether `other` is this descriptor or one of its ancestors
    pub fn derives_from(self: &Arc<Self>, other: &Arc<TypeDescriptor>) -> bool {
        let mut current = Some(Arc::clone(self));
        while let Some(descriptor) = current {
            if Arc::ptr_eq(&descriptor, other) {
                return true;
            }
            current = descriptor.parent();
        }
        false
    }

    /// Create an instance carrying `fields`; no constructor logic runs
    pub fn construct(self: &Arc<Self>, fields: Mapping) -> Instance {
        Instance {
            descriptor: Arc::clone(self),
            fields,
        }
    }
}

/// Make `child` delegate unresolved capability lookups to `parent`.
///
/// Replaces any previous parent of `child`. Instances already constructed from
/// `child` observe the new link immediately.
///
/// # Errors
///
/// Fails with an invalid-argument error when the link would make a descriptor
/// its own ancestor.
pub fn inherit(child: &Arc<TypeDescriptor>, parent: &Arc<TypeDescriptor>) -> Result<()> {
    let _link = LINK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if parent.derives_from(child) {
        return Err(BasisError::invalid_argument_with_code(
            ErrorCode::ARG_CYCLIC_DELEGATION,
            format!(
                "'{}' cannot inherit from '{}': it is already an ancestor",
                child.name(),
                parent.name()
            ),
            Some("parent".to_string()),
        ));
    }

    debug!(child = child.name(), parent = parent.name(), "linking delegation");
    *child
        .parent
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(parent));
    Ok(())
}

/// A value constructed from a [`TypeDescriptor`]
#[derive(Debug, Clone)]
pub struct Instance {
    descriptor: Arc<TypeDescriptor>,
    fields: Mapping,
}

impl Instance {
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Mapping {
        &mut self.fields
    }

    /// True for the constructing descriptor and every ancestor it delegates to
    pub fn is_instance_of(&self, descriptor: &Arc<TypeDescriptor>) -> bool {
        self.descriptor.derives_from(descriptor)
    }

    pub fn lookup(&self, name: &str) -> Option<Callable> {
        self.descriptor.lookup(name)
    }

    /// Call a capability with this instance's fields as the receiver
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<std::result::Result<Value, Value>> {
        let capability = self.lookup(name).ok_or_else(|| {
            BasisError::invalid_argument_with_code(
                ErrorCode::ARG_UNKNOWN_CAPABILITY,
                format!("'{}' has no capability '{}'", self.descriptor.name(), name),
                Some(name.to_string()),
            )
        })?;
        let receiver = Value::Mapping(self.fields.clone());
        Ok(capability.call(&receiver, args))
    }
}
