use crate::cli::args::Ipv6Action;
use num_bigint::BigUint;
use octext::{CodecError, rfc1924};
use std::net::Ipv6Addr;

pub fn handle(action: Ipv6Action) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        Ipv6Action::Encode { address } => {
            let encoded = match address.parse::<Ipv6Addr>() {
                Ok(addr) => rfc1924::ipv6_encode(u128::from(addr)),
                Err(_) => {
                    let value = address.parse::<BigUint>().map_err(|_| {
                        CodecError::invalid_type(&address, "an IPv6 address or a decimal integer")
                    })?;
                    rfc1924::ipv6_encode_uint(&value)?
                }
            };
            println!("{}", encoded);
        }
        Ipv6Action::Decode { encoded, int } => {
            let value = rfc1924::ipv6_decode(&encoded)?;
            if int {
                println!("{}", value);
            } else {
                println!("{}", Ipv6Addr::from(value));
            }
        }
    }

    Ok(())
}
