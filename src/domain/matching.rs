//! Canonical room id derivation for a matched pair.

/// Room id for two participants: `"room_{min}_{max}"`.
///
/// Deterministic and commutative, so both sides of a match land in the same
/// room regardless of who asked first.
pub fn room_id_for(user_a: i64, user_b: i64) -> String {
    let (low, high) = if user_a <= user_b {
        (user_a, user_b)
    } else {
        (user_b, user_a)
    };
    format!("room_{low}_{high}")
}
