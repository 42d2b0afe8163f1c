//! UI Components
//!
//! Reusable Leptos components.

mod cart_drawer;
mod clear_button;
mod product_card;
mod product_grid;
mod sign_in_form;
mod toast_stack;
mod wishlist_panel;

pub use cart_drawer::CartDrawer;
pub use clear_button::ClearButton;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use sign_in_form::SignInForm;
pub use toast_stack::ToastStack;
pub use wishlist_panel::WishlistPanel;
