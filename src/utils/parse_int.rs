pub fn parse_optional_int(value: Option<&String>) -> Option<i64> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<i64>().ok()
        }
    })
}
