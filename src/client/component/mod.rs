pub mod header;
pub mod layout;
pub mod page;
pub mod searchable_dropdown;

pub use header::Header;
pub use layout::Layout;
pub use page::{ErrorPage, LoadingPage, Page};
pub use searchable_dropdown::{DropdownItem, SearchableDropdown, SelectedItem, SelectedItemsList};
