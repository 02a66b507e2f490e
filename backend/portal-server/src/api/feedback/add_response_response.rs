use crate::ResponseDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddResponseResponse {
    pub response: ResponseDto,
}
