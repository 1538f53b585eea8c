//! Sort cycle for rendered lists.

use crate::model::resource::Resource;

/// Display ordering, cycled by a single toggle action.
///
/// Rotation is fixed: alphabetical, reversed fetch order, fetch order, back
/// to alphabetical. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Alphabetical,
    Reversed,
    Queue,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            Self::Alphabetical => Self::Reversed,
            Self::Reversed => Self::Queue,
            Self::Queue => Self::Alphabetical,
        }
    }

    /// Label shown on the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Alphabetical => "Alfabética",
            Self::Reversed => "em Pilha",
            Self::Queue => "em Fila",
        }
    }

    /// Returns a sorted copy; the input keeps fetch order.
    pub fn apply<R: Resource>(self, items: &[R]) -> Vec<R> {
        let mut sorted = items.to_vec();
        match self {
            Self::Alphabetical => sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key())),
            Self::Reversed => sorted.reverse(),
            Self::Queue => {}
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::SortMode;
    use crate::model::contact::Contact;

    fn contact(id: u64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: "+551199999999999".to_string(),
            email: "x@x.com".to_string(),
        }
    }

    #[test]
    fn three_toggles_return_to_alphabetical() {
        let mode = SortMode::default();
        assert_eq!(mode, SortMode::Alphabetical);
        assert_eq!(mode.next().next().next(), SortMode::Alphabetical);
    }

    #[test]
    fn alphabetical_sorts_by_name() {
        let items = [contact(1, "Bob"), contact(2, "Ana")];
        let sorted = SortMode::Alphabetical.apply(&items);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bob"]);
    }

    #[test]
    fn reversed_and_queue_preserve_fetch_order_semantics() {
        let items = [contact(1, "Bob"), contact(2, "Ana"), contact(3, "Caio")];

        let reversed = SortMode::Reversed.apply(&items);
        let names: Vec<&str> = reversed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Caio", "Ana", "Bob"]);

        let queue = SortMode::Queue.apply(&items);
        let names: Vec<&str> = queue.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Ana", "Caio"]);
    }

    #[test]
    fn labels_match_the_toggle_button_texts() {
        assert_eq!(SortMode::Alphabetical.label(), "Alfabética");
        assert_eq!(SortMode::Reversed.label(), "em Pilha");
        assert_eq!(SortMode::Queue.label(), "em Fila");
    }
}
