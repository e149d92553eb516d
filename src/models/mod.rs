pub mod line_item;
pub mod order_record;
pub mod product;
