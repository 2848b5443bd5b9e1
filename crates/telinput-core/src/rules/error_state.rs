use crate::domain::FormFieldState;

/// Whether the host should show its error styling.
///
/// An upstream error is surfaced once the field is empty or has been
/// touched, and always while the field is not focused; a focused, untouched
/// field with a value keeps the error hidden until the user commits.
pub fn evaluate_error_state(host_error: bool, field: FormFieldState, has_value: bool) -> bool {
    (host_error && (!has_value || field.touched)) || (!field.focused && host_error)
}

#[cfg(test)]
mod tests {
    use super::evaluate_error_state;
    use crate::domain::FormFieldState;

    #[test]
    fn no_host_error_means_no_error_state() {
        let field = FormFieldState {
            focused: false,
            touched: true,
        };
        assert!(!evaluate_error_state(false, field, true));
    }

    #[test]
    fn focused_untouched_field_with_value_hides_the_error() {
        let field = FormFieldState {
            focused: true,
            touched: false,
        };
        assert!(!evaluate_error_state(true, field, true));
    }

    #[test]
    fn touched_field_shows_the_error_while_focused() {
        let field = FormFieldState {
            focused: true,
            touched: true,
        };
        assert!(evaluate_error_state(true, field, true));
    }

    #[test]
    fn blurred_field_always_shows_the_error() {
        let field = FormFieldState {
            focused: false,
            touched: false,
        };
        assert!(evaluate_error_state(true, field, true));
    }

    #[test]
    fn empty_field_shows_the_error_even_while_focused() {
        let field = FormFieldState {
            focused: true,
            touched: false,
        };
        assert!(evaluate_error_state(true, field, false));
    }
}
