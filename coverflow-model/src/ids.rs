use uuid::Uuid;

/// Namespace used to derive stable album ids from catalog keys.
const CATALOG_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a8e_33d4_4c5b_9a0e_71b2_c4d8_5e90);

/// Strongly typed ID for albums
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumId(pub Uuid);

impl Default for AlbumId {
    fn default() -> Self {
        Self::new()
    }
}

impl AlbumId {
    pub fn new() -> Self {
        AlbumId(Uuid::now_v7())
    }

    /// Derive a stable id from the catalog's own string key. The same key
    /// always yields the same id, so a refetched dataset keeps its identities.
    pub fn from_catalog_key(key: &str) -> Self {
        AlbumId(Uuid::new_v5(&CATALOG_NAMESPACE, key.as_bytes()))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for AlbumId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
