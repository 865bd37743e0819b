use crate::{
    api::{AddStudentRequest, EnrolledStudent},
    pages::session_detail::utils::PLACEHOLDER,
    utils::form::{required, FormError},
};

/// Colour band for a student's attendance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Good,
    Warning,
    Critical,
}

impl ProgressTier {
    pub fn text_class(self) -> &'static str {
        match self {
            ProgressTier::Good => "text-emerald-600",
            ProgressTier::Warning => "text-amber-600",
            ProgressTier::Critical => "text-red-600",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            ProgressTier::Good => "bg-emerald-500",
            ProgressTier::Warning => "bg-amber-500",
            ProgressTier::Critical => "bg-red-500",
        }
    }
}

/// `rate` is a percentage. Boundaries belong to the higher tier.
pub fn classify_rate(rate: f64) -> ProgressTier {
    if rate >= 80.0 {
        ProgressTier::Good
    } else if rate >= 50.0 {
        ProgressTier::Warning
    } else {
        ProgressTier::Critical
    }
}

pub fn format_rate(rate: f64) -> String {
    let rounded = (rate * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// Width of the progress bar, clamped so bad data cannot overflow it.
pub fn progress_width(rate: f64) -> String {
    let clamped = if rate.is_finite() { rate.clamp(0.0, 100.0) } else { 0.0 };
    format!("width: {}%", clamped)
}

pub fn progress_fraction(student: &EnrolledStudent) -> String {
    format!("{}/{} buổi", student.attended_count, student.total_sessions)
}

/// Avatar letter, or the roster placeholder when the name is missing.
pub fn student_initial(name: Option<&str>) -> String {
    match name.and_then(|n| n.trim().chars().next()) {
        Some(first) => first.to_uppercase().collect(),
        None => PLACEHOLDER.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddStudentFormState {
    pub name: String,
    pub student_id: String,
}

impl AddStudentFormState {
    pub fn to_request(&self) -> Result<AddStudentRequest, FormError> {
        Ok(AddStudentRequest {
            name: required(&self.name, "họ và tên")?,
            student_id: required(&self.student_id, "mã sinh viên")?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// File chosen for bulk enrollment, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

pub const UPLOAD_ACCEPT: &str = ".csv,.xlsx,.xls";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::enrolled_student;

    #[test]
    fn rate_tiers_split_at_fifty_and_eighty() {
        assert_eq!(classify_rate(100.0), ProgressTier::Good);
        assert_eq!(classify_rate(80.0), ProgressTier::Good);
        assert_eq!(classify_rate(79.0), ProgressTier::Warning);
        assert_eq!(classify_rate(79.99), ProgressTier::Warning);
        assert_eq!(classify_rate(50.0), ProgressTier::Warning);
        assert_eq!(classify_rate(49.9), ProgressTier::Critical);
        assert_eq!(classify_rate(0.0), ProgressTier::Critical);
    }

    #[test]
    fn rate_formatting_drops_trailing_zero() {
        assert_eq!(format_rate(80.0), "80%");
        assert_eq!(format_rate(66.666), "66.7%");
        assert_eq!(format_rate(0.0), "0%");
    }

    #[test]
    fn progress_width_is_clamped() {
        assert_eq!(progress_width(40.0), "width: 40%");
        assert_eq!(progress_width(140.0), "width: 100%");
        assert_eq!(progress_width(-3.0), "width: 0%");
        assert_eq!(progress_width(f64::NAN), "width: 0%");
    }

    #[test]
    fn fraction_and_initial_render_student_progress() {
        let student = enrolled_student(1, "đặng Thu", 4, 5);
        assert_eq!(progress_fraction(&student), "4/5 buổi");
        assert_eq!(student_initial(student.student_name.as_deref()), "Đ");
        assert_eq!(student_initial(None), "...");
        assert_eq!(student_initial(Some("   ")), "...");
    }

    #[test]
    fn add_student_form_requires_trimmed_fields() {
        let mut form = AddStudentFormState {
            name: "  Hoàng Văn E ".into(),
            student_id: "".into(),
        };
        assert_eq!(form.to_request().unwrap_err(), FormError::Required("mã sinh viên"));

        form.student_id = " SV010".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Hoàng Văn E");
        assert_eq!(request.student_id, "SV010");

        form.reset();
        assert_eq!(form, AddStudentFormState::default());
    }
}
