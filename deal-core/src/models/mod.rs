mod deal_inputs;
mod margin_result;

pub use deal_inputs::DealInputs;
pub use margin_result::MarginResult;
