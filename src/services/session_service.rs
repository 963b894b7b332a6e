use rand::RngCore;

/// 32 random bytes, hex encoded. Collision chance is negligible for an
/// in-memory session store.
pub fn random_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
