use chrono::Utc;

/// Generate a time-based id (milliseconds since the Unix epoch), stepping forward one millisecond at a time
/// until `exists` no longer reports a clash.
pub fn generate_unique_game_id<F>(exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = millis.to_string();
        if !exists(&id) {
            return id;
        }
        millis += 1;
    }
}
