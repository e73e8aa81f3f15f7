mod handle_dns_query;
mod lookup_address;
mod lookup_pointer;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use lookup_address::LookupAddressUseCase;
pub use lookup_pointer::LookupPointerUseCase;
