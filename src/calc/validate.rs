/// Checks that input is a well-formed comma list of non-negative integers.
///
/// Splitting on `,` keeps empty segments, so a leading, trailing, or doubled
/// comma produces an empty token and fails the list. Only whitespace around a
/// token is tolerated; whitespace inside one fails the digits-only check.
/// There is no cap on token magnitude — values may exceed u64.
pub fn is_valid(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    input.split(',').all(|part| {
        let token = part.trim();

        !token.is_empty()
            && token.bytes().all(|b| b.is_ascii_digit())
            && (token == "0" || !token.starts_with('0'))
    })
}
