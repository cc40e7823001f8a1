pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod number_input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use number_input::NumberInput;
pub use select::Select;
pub use textarea::Textarea;
