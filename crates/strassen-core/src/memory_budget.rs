//! Memory budget estimation and validation.

/// Memory estimate for multiplying one pair of square matrices.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// The two operands (in bytes).
    pub input_bytes: usize,
    /// The naive product (in bytes).
    pub naive_bytes: usize,
    /// Peak live buffers of the Strassen recursion, product included (in bytes).
    pub strassen_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory for multiplying two `order x order` matrices of `T`
    /// with both algorithms.
    #[must_use]
    pub fn estimate<T>(order: usize) -> Self {
        let element = std::mem::size_of::<T>();
        let square = order * order;

        let input_bytes = 2 * square * element;
        let naive_bytes = square * element;
        let strassen_bytes = strassen_peak_elements(order) * element;

        Self {
            input_bytes,
            naive_bytes,
            strassen_bytes,
            total_bytes: input_bytes + naive_bytes + strassen_bytes,
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Upper bound on live elements while the Strassen recursion runs.
///
/// A frame of order `m` holds its `m x m` product, ten sums/differences and
/// up to seven sub-products of order `m/2` while one child frame is active.
fn strassen_peak_elements(order: usize) -> usize {
    let mut total = 0;
    let mut m = order;
    while m > 1 {
        let half = m / 2;
        total += m * m + 17 * half * half;
        m = half;
    }
    total + usize::from(order > 0)
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means unlimited.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot be parsed.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| format!("memory limit {s:?} overflows"))
}
