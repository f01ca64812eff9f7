//! Best-effort localStorage mirror for auth flow state. Two keys exist:
//! `blockedUntil_<email>` holds an epoch-millisecond lockout deadline so a
//! reload during a lockout still shows the countdown, and `rememberedEmail`
//! prefills the login form. Neither key is authoritative; the rate limiter
//! decides, the cache only mirrors its decisions. A cached deadline in the
//! past is treated as absent and evicted on read.

/// Key holding the globally remembered login email.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

const BLOCKED_KEY_PREFIX: &str = "blockedUntil_";

/// Builds the per-identity lockout key.
pub fn blocked_key(email: &str) -> String {
    format!("{BLOCKED_KEY_PREFIX}{email}")
}

/// Parses a stored deadline; only deadlines strictly in the future count.
pub fn parse_deadline(raw: &str, now: u64) -> Option<u64> {
    let deadline = raw.trim().parse::<u64>().ok()?;
    if deadline > now { Some(deadline) } else { None }
}

/// Reads the mirrored lockout deadline for an identity, evicting stale entries.
pub fn load_blocked_until(email: &str, now: u64) -> Option<u64> {
    let key = blocked_key(email);
    let raw = raw_get(&key)?;

    match parse_deadline(&raw, now) {
        Some(deadline) => Some(deadline),
        None => {
            raw_remove(&key);
            None
        }
    }
}

/// Mirrors a lockout deadline change; `None` clears the entry.
pub fn store_blocked_until(email: &str, deadline: Option<u64>) {
    let key = blocked_key(email);
    match deadline {
        Some(deadline) => raw_set(&key, &deadline.to_string()),
        None => raw_remove(&key),
    }
}

/// Returns the remembered login email, if any.
pub fn remembered_email() -> Option<String> {
    raw_get(REMEMBERED_EMAIL_KEY).filter(|value| !value.trim().is_empty())
}

/// Persists or clears the remembered login email (a single global slot).
pub fn set_remembered_email(email: Option<&str>) {
    match email {
        Some(email) => raw_set(REMEMBERED_EMAIL_KEY, email),
        None => raw_remove(REMEMBERED_EMAIL_KEY),
    }
}

#[cfg(target_arch = "wasm32")]
fn raw_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn raw_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn raw_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn raw_remove(_key: &str) {}

#[cfg(test)]
mod tests {
    use super::{blocked_key, parse_deadline};

    #[test]
    fn blocked_key_is_scoped_per_identity() {
        assert_eq!(blocked_key("a@x.com"), "blockedUntil_a@x.com");
        assert_ne!(blocked_key("a@x.com"), blocked_key("b@x.com"));
    }

    #[test]
    fn parse_deadline_accepts_only_future_timestamps() {
        assert_eq!(parse_deadline("120000", 100_000), Some(120_000));
        assert_eq!(parse_deadline(" 120000 ", 100_000), Some(120_000));
        assert_eq!(parse_deadline("120000", 120_000), None);
        assert_eq!(parse_deadline("120000", 200_000), None);
    }

    #[test]
    fn parse_deadline_rejects_garbage() {
        assert_eq!(parse_deadline("not-a-number", 0), None);
        assert_eq!(parse_deadline("", 0), None);
        assert_eq!(parse_deadline("-5", 0), None);
    }
}
