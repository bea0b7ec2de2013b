// Domain layer: the transient payload model and the ports FetchAndRender talks through.

pub mod model;
pub mod ports;
