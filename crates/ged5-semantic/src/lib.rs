mod dates;
mod names;
mod privacy;
mod text;

pub use dates::CalendarPoint;
pub use dates::DateValue;
pub use dates::Qualifier;
pub use names::family_name;
pub use names::full_name;
pub use names::given_names;
pub use names::NameValue;
pub use privacy::birth_year;
pub use privacy::death_year;
pub use privacy::PrivacyPolicy;
pub use text::text;
pub use text::text_lines;
