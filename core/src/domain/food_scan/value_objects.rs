use uuid::Uuid;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodImageInput {
    pub pet_id: Uuid,
    pub image: Vec<u8>,
    pub include_portion_estimates: bool,
}
