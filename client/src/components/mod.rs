pub mod header;
pub mod inventory_upload;
pub mod medicine_search;
pub mod pharmacy_card;
pub mod protected_route;
pub mod text_field;
