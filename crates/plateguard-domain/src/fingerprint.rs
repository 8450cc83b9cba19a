use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an item finding.
///
/// Identity fields:
/// - rule_id
/// - code
/// - item kind
/// - item name
/// - matched values (allergen, ingredient, tag or keyword), in the given order
pub fn fingerprint_for_item(
    rule_id: &str,
    code: &str,
    item_kind: &str,
    item_name: &str,
    matched: &[&str],
) -> String {
    let mut parts = vec![rule_id, code, item_kind, item_name];
    parts.extend_from_slice(matched);
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
