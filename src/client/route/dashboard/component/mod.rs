pub mod guild_header;
pub mod lookup_select;
pub mod save_footer;

pub use guild_header::GuildInfoHeader;
pub use lookup_select::{LookupSelect, TrustedUsersSelect};
pub use save_footer::SaveFooter;
