use std::io;
use std::net::IpAddr;

use tracing::debug;

use crate::resolver::HostnameResolver;

/// Hostname resolution through the local system's name service.
///
/// The short form comes straight from the kernel hostname. The canonical form
/// forward-resolves the short name and reverse-resolves the first address the
/// name service returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostnameResolver for SystemResolver {
    fn resolve(&self, canonical: bool) -> io::Result<String> {
        let short = dns_lookup::get_hostname()?;
        if !canonical {
            return Ok(short);
        }

        let addr: IpAddr = dns_lookup::lookup_host(&short)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no address records for {short}"),
                )
            })?;
        let fqdn = dns_lookup::lookup_addr(&addr)?;
        debug!(short = %short, fqdn = %fqdn, "resolved canonical hostname");
        Ok(fqdn)
    }
}
