/// Splits the raw track field on commas. Entries are neither trimmed nor filtered.
pub fn split_track_uris(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}
