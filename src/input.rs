use crate::AllocationError;

/// Parse a comma separated list of sizes, such as `10,25,20`.
pub fn parse_list(s: &str) -> Result<Vec<u32>, AllocationError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|e| AllocationError::InvalidNumber(part.to_string(), e))
        })
        .collect()
}
