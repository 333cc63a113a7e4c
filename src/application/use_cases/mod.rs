/// Use cases module containing application business logic orchestration
mod generate_summary;

pub use generate_summary::GenerateSummaryUseCase;
