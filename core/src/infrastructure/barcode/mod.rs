pub mod rxing_decoder;
