//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod nrp_dto;

pub use nrp_dto::{
    CalculateNrpRequestDto, CalculateNrpResponseDto, MarketplaceDto, ParametersDto, ViolationDto,
};
