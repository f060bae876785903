use crate::core::ClassToggle;

/// Moves the selected marker to `buttons[clicked]`. Out-of-range clicks change nothing.
pub fn select_amount<B: ClassToggle>(buttons: &[B], clicked: usize, selected_class: &str) -> bool {
    if clicked >= buttons.len() {
        return false;
    }

    for (index, button) in buttons.iter().enumerate() {
        button.set_class(selected_class, index == clicked);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Button {
        classes: RefCell<Vec<String>>,
    }

    impl ClassToggle for Button {
        fn set_class(&self, class: &str, enabled: bool) {
            let mut classes = self.classes.borrow_mut();
            classes.retain(|c| c != class);
            if enabled {
                classes.push(class.to_string());
            }
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    fn selected(buttons: &[Button]) -> Vec<usize> {
        buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.has_class("selected"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_only_last_click_is_selected() {
        let buttons: Vec<Button> = (0..4).map(|_| Button::default()).collect();

        for click in [0, 2, 2, 3, 1] {
            assert!(select_amount(&buttons, click, "selected"));
            assert_eq!(selected(&buttons), vec![click]);
        }
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let buttons: Vec<Button> = (0..2).map(|_| Button::default()).collect();
        select_amount(&buttons, 1, "selected");
        assert!(!select_amount(&buttons, 5, "selected"));
        assert_eq!(selected(&buttons), vec![1]);
    }
}
