use crate::domain::ValueDomain;
use crate::error::{Result, XorSimError};
use crate::scenario::scenario::Scenario;

/// Reject preconditions the simulator relies on, before any table is built.
pub fn validate_scenario(s: &Scenario) -> Result<()> {
    // n >= 1: extremes are undefined for an empty multiset.
    if s.values.is_empty() {
        return Err(XorSimError::Validation("scenario needs at least one value".into()));
    }

    if let Some(bits) = s.domain_bits {
        if bits > ValueDomain::MAX_BITS {
            return Err(XorSimError::Validation(format!(
                "domain_bits {bits} exceeds max {}",
                ValueDomain::MAX_BITS
            )));
        }
    }

    let domain = s.domain()?;

    // Closure under XOR needs the mask inside the domain too.
    domain.check(s.mask)?;
    for &v in &s.values {
        domain.check(v)?;
    }

    if s.values.len() as u64 > u32::MAX as u64 {
        return Err(XorSimError::Validation("too many values (max u32::MAX)".into()));
    }

    Ok(())
}
