use uuid::{Uuid, Variant};

const HYPHENATED_LEN: usize = 36;

/// Returns true when `value` is a canonical hyphenated UUID: version 1 through 5
/// with the RFC 4122 variant, or the nil UUID. Case-insensitive.
pub fn is_valid_uuid(value: &str) -> bool {
    // The simple, braced and urn forms all have other lengths.
    if value.len() != HYPHENATED_LEN {
        return false;
    }

    match Uuid::try_parse(value) {
        Ok(uuid) if uuid.is_nil() => true,
        Ok(uuid) => {
            matches!(uuid.get_version_num(), 1..=5) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}
