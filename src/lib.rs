//! Target-runtime profile for a glTF writer: GL enum bindings and accessor
//! component counts. Plain getters return 0 on a miss.

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("no enum binding registered for {0:?}")]
    MissingBinding(String),
    #[error("unknown accessor type {0:?}")]
    UnknownType(String),
    #[error("malformed profile document")]
    BadDocument(#[from] serde_json::Error),
}

mod mapping;
mod webgl;
pub use mapping::*;
pub use webgl::{data_type_enum_name, float_type_enum_name, WEBGL_1_0_ENUMS};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProfileRegistry {
    #[serde(default)]
    name: String,
    #[serde(default, serialize_with = "sorted_enums")]
    enums: std::collections::HashMap<String, u32>, // name -> GL enum
}

// written sorted by name
fn sorted_enums<S: serde::Serializer>(
    enums: &std::collections::HashMap<String, u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let sorted: std::collections::BTreeMap<&String, &u32> = enums.iter().collect();
    serde::Serialize::serialize(&sorted, serializer)
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Profile preloaded with the WebGL 1.0 enums listed in [`WEBGL_1_0_ENUMS`].
    pub fn webgl_1_0() -> Self {
        let mut registry = Self::named("WebGL 1.0");
        for (name, code) in WEBGL_1_0_ENUMS {
            registry.enums.insert((*name).to_string(), *code);
        }
        tracing::debug!(profile = %registry.name, count = registry.enums.len(), "loaded preset");
        registry
    }

    pub fn from_json(doc: &str) -> Result<Self, ProfileError> {
        let registry: Self = serde_json::from_str(doc)?;
        tracing::debug!(profile = %registry.name, count = registry.enums.len(), "loaded profile document");
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_enum_binding(&mut self, name: impl Into<String>, code: u32) {
        let name = name.into();
        match self.enums.insert(name.clone(), code) {
            Some(old) if old != code => {
                tracing::warn!(profile = %self.name, %name, old, new = code, "enum binding overwritten");
            }
            _ => tracing::debug!(profile = %self.name, %name, code, "enum binding set"),
        }
    }

    pub fn enum_binding(&self, name: &str) -> u32 {
        self.try_enum_binding(name).unwrap_or_default()
    }

    pub fn try_enum_binding(&self, name: &str) -> Option<u32> {
        let code = self.enums.get(name).copied();
        if code.is_none() {
            tracing::trace!(profile = %self.name, name, "enum binding miss");
        }
        code
    }

    pub fn require_enum_binding(&self, name: &str) -> Result<u32, ProfileError> {
        self.try_enum_binding(name)
            .ok_or_else(|| ProfileError::MissingBinding(name.to_string()))
    }

    pub fn contains_enum_binding(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Scalar components in an accessor type, or 0 for unknown names.
    ///
    /// `MAT2` also yields 0, see [`MAT2_MISSING`].
    pub fn component_count(&self, type_name: &str) -> usize {
        self.try_component_count(type_name).unwrap_or_default()
    }

    pub fn try_component_count(&self, type_name: &str) -> Option<usize> {
        let count = components_for_type(type_name);
        if count.is_none() {
            tracing::trace!(profile = %self.name, type_name, "unknown accessor type");
        }
        count
    }

    pub fn require_component_count(&self, type_name: &str) -> Result<usize, ProfileError> {
        self.try_component_count(type_name)
            .ok_or_else(|| ProfileError::UnknownType(type_name.to_string()))
    }

    /// Byte size of one accessor element, e.g. `VEC3` of `F32` is 12.
    pub fn element_size(&self, type_name: &str, ct: gltf::accessor::DataType) -> Option<usize> {
        let count = self.try_component_count(type_name)?;
        Some(count * component_size_bytes(ct))
    }

    pub fn data_type_enum(&self, ct: gltf::accessor::DataType) -> u32 {
        self.enum_binding(data_type_enum_name(ct))
    }

    pub fn freeze(self) -> Profile {
        tracing::debug!(profile = %self.name, count = self.enums.len(), "profile frozen");
        Profile {
            inner: std::sync::Arc::new(self),
        }
    }
}

/// Read-only profile shared between conversion tasks.
#[derive(Debug, Clone)]
pub struct Profile {
    inner: std::sync::Arc<ProfileRegistry>,
}

impl Profile {
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn enum_binding(&self, name: &str) -> u32 {
        self.inner.enum_binding(name)
    }

    pub fn try_enum_binding(&self, name: &str) -> Option<u32> {
        self.inner.try_enum_binding(name)
    }

    pub fn require_enum_binding(&self, name: &str) -> Result<u32, ProfileError> {
        self.inner.require_enum_binding(name)
    }

    pub fn contains_enum_binding(&self, name: &str) -> bool {
        self.inner.contains_enum_binding(name)
    }

    pub fn component_count(&self, type_name: &str) -> usize {
        self.inner.component_count(type_name)
    }

    pub fn try_component_count(&self, type_name: &str) -> Option<usize> {
        self.inner.try_component_count(type_name)
    }

    pub fn require_component_count(&self, type_name: &str) -> Result<usize, ProfileError> {
        self.inner.require_component_count(type_name)
    }

    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.inner.enum_names()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn element_size(&self, type_name: &str, ct: gltf::accessor::DataType) -> Option<usize> {
        self.inner.element_size(type_name, ct)
    }

    pub fn data_type_enum(&self, ct: gltf::accessor::DataType) -> u32 {
        self.inner.data_type_enum(ct)
    }

    pub fn to_registry(&self) -> ProfileRegistry {
        (*self.inner).clone()
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        self.inner.to_json()
    }
}
