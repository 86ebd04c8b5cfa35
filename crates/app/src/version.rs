//! Test framework version gate.

use std::cmp::Ordering;

use crate::error::{AppError, Result};

/// Oldest test framework release the IDE works with.
pub const MIN_FRAMEWORK_VERSION: &str = "2.5";

/// Compares dotted version strings numerically.
///
/// Each component contributes its leading digits (`"7.0rc1"` reads as
/// `7.0`); missing components count as zero, so `"2.5"` equals `"2.5.0"`.
/// Returns `None` when `a` or `b` has no numeric major component.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
	let a = numeric_parts(a)?;
	let b = numeric_parts(b)?;
	let len = a.len().max(b.len());
	let component = |parts: &[u64], i: usize| parts.get(i).copied().unwrap_or(0);
	Some(
		(0..len)
			.map(|i| component(&a, i).cmp(&component(&b, i)))
			.find(|ord| ord.is_ne())
			.unwrap_or(Ordering::Equal),
	)
}

fn numeric_parts(version: &str) -> Option<Vec<u64>> {
	let mut parts = Vec::new();
	for component in version.trim().split('.') {
		let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
		match digits.parse() {
			Ok(n) => parts.push(n),
			Err(_) => break,
		}
	}
	(!parts.is_empty()).then_some(parts)
}

/// Fails unless `found` is at least [`MIN_FRAMEWORK_VERSION`].
pub fn check_framework_version(found: &str) -> Result<()> {
	match compare_versions(found, MIN_FRAMEWORK_VERSION) {
		Some(Ordering::Greater | Ordering::Equal) => Ok(()),
		_ => Err(AppError::UnsupportedFramework {
			found: found.to_string(),
			required: MIN_FRAMEWORK_VERSION,
		}),
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("2.5", "2.5", Some(Ordering::Equal))]
	#[case("2.5.0", "2.5", Some(Ordering::Equal))]
	#[case("2.10", "2.5", Some(Ordering::Greater))]
	#[case("2.1.3", "2.5", Some(Ordering::Less))]
	#[case("7.0rc1", "7.0", Some(Ordering::Equal))]
	#[case("trunk", "2.5", None)]
	fn compares(#[case] a: &str, #[case] b: &str, #[case] expected: Option<Ordering>) {
		assert_eq!(compare_versions(a, b), expected);
	}

	#[test]
	fn gate() {
		assert!(check_framework_version("7.0.1").is_ok());
		assert!(check_framework_version("2.5").is_ok());
		assert!(matches!(
			check_framework_version("2.1"),
			Err(AppError::UnsupportedFramework { found, .. }) if found == "2.1"
		));
		assert!(check_framework_version("").is_err());
	}
}
