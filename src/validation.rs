//! Input validation for assignment problems.
//!
//! Checks the shape and values of events, slots, and the cost matrix
//! before any strategy runs. Detects:
//! - Empty event or slot lists
//! - Empty or ragged cost matrices
//! - Label counts that disagree with the matrix shape
//! - Negative or non-finite costs
//! - Costs so large that an assignment total would overflow to infinity
//! - More events than slots (every strategy needs distinct slots)
//!
//! All problems are reported together, not just the first one.

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No events were given.
    EmptyEvents,
    /// No slots were given.
    EmptySlots,
    /// The cost matrix has no rows or no columns.
    EmptyMatrix,
    /// A matrix row has a different length than the first row.
    RaggedRow,
    /// Event count differs from the number of matrix rows.
    EventCountMismatch,
    /// Slot count differs from the number of matrix columns.
    SlotCountMismatch,
    /// A cost is below zero.
    NegativeCost,
    /// A cost is NaN or infinite.
    NonFiniteCost,
    /// Entries are finite but the worst-case assignment total is not.
    CostOverflow,
    /// There are more events than slots.
    InsufficientSlots,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a raw cost matrix on its own.
///
/// Checks:
/// 1. At least one row and one column
/// 2. All rows have the same length
/// 3. Every entry is finite and non-negative
/// 4. The sum of row maxima is finite, so every assignment total is
pub fn validate_costs(rows: &[Vec<f64>]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_cost_errors(rows, &mut errors);
    finish(errors)
}

/// Validates a complete assignment problem.
///
/// Checks everything [`validate_costs`] does, plus:
/// 1. Events and slots are non-empty
/// 2. `events.len()` equals the row count and `slots.len()` the column count
/// 3. There are at least as many slots as events
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input<E, S>(events: &[E], slots: &[S], rows: &[Vec<f64>]) -> ValidationResult
where
    E: AsRef<str>,
    S: AsRef<str>,
{
    let mut errors = Vec::new();

    if events.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyEvents,
            "At least one event is required",
        ));
    }
    if slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlots,
            "At least one slot is required",
        ));
    }

    collect_cost_errors(rows, &mut errors);

    if !rows.is_empty() && events.len() != rows.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EventCountMismatch,
            format!(
                "{} events given but cost matrix has {} rows",
                events.len(),
                rows.len()
            ),
        ));
    }
    if let Some(first) = rows.first() {
        if slots.len() != first.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotCountMismatch,
                format!(
                    "{} slots given but cost matrix has {} columns",
                    slots.len(),
                    first.len()
                ),
            ));
        }
    }

    if !slots.is_empty() && events.len() > slots.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientSlots,
            format!(
                "{} events cannot be placed in {} distinct slots",
                events.len(),
                slots.len()
            ),
        ));
    }

    finish(errors)
}

fn collect_cost_errors(rows: &[Vec<f64>], errors: &mut Vec<ValidationError>) {
    let width = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMatrix,
                "Cost matrix must have at least one row and one column",
            ));
            return;
        }
    };

    let mut entries_ok = true;
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedRow,
                format!("Row {i} has {} columns, expected {width}", row.len()),
            ));
        }
        for (j, &cost) in row.iter().enumerate() {
            if !cost.is_finite() {
                entries_ok = false;
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteCost,
                    format!("Cost at ({i}, {j}) is not finite: {cost}"),
                ));
            } else if cost < 0.0 {
                entries_ok = false;
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeCost,
                    format!("Cost at ({i}, {j}) is negative: {cost}"),
                ));
            }
        }
    }

    if entries_ok {
        let worst_total: f64 = rows
            .iter()
            .map(|row| row.iter().copied().fold(0.0, f64::max))
            .sum();
        if !worst_total.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::CostOverflow,
                "Sum of the largest cost per row overflows; scale the costs down",
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
