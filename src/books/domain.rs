use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

// Book is the capability set shared by every catalog variant. Identity and lend state
// behave the same for all of them; only the rendered summary differs.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;
    fn render_summary(&self) -> String;

    fn isbn(&self) -> &str {
        self.id()
    }

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
}
