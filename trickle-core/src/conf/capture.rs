use crate::conf::ConfigError;
use crate::conf::range::{CAPTURE_PORT, validate_range};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            "icmp" => Ok(Protocol::Icmp),
            _ => Err(ConfigError::UnsupportedProtocol {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Icmp => "icmp",
        })
    }
}

/// Filter clauses, all optional, combined with `and`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureFilter {
    pub protocol: Option<Protocol>,
    pub port: Option<u16>,
    pub src_host: Option<Ipv4Addr>,
    pub dst_host: Option<Ipv4Addr>,
}

impl CaptureFilter {
    /// Validate raw filter options.
    pub fn parse(
        protocol: Option<&str>,
        port: Option<u32>,
        src_host: Option<&str>,
        dst_host: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let protocol = protocol.map(str::parse::<Protocol>).transpose()?;

        let port = port
            .map(|p| validate_range(p, &CAPTURE_PORT))
            .transpose()?
            .map(|p| p as u16);

        Ok(Self {
            protocol,
            port,
            src_host: src_host.map(|h| parse_host("srchost", h)).transpose()?,
            dst_host: dst_host.map(|h| parse_host("dsthost", h)).transpose()?,
        })
    }

    /// Filter program text, or `None` when no clause was given.
    pub fn expression(&self) -> Option<String> {
        let mut clauses = Vec::new();

        if let Some(protocol) = self.protocol {
            clauses.push(protocol.to_string());
        }
        if let Some(port) = self.port {
            clauses.push(format!("port {port}"));
        }
        if let Some(host) = self.src_host {
            clauses.push(format!("src host {host}"));
        }
        if let Some(host) = self.dst_host {
            clauses.push(format!("dst host {host}"));
        }

        (!clauses.is_empty()).then(|| clauses.join(" and "))
    }
}

fn parse_host(which: &'static str, value: &str) -> Result<Ipv4Addr, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidHost {
        which,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureConfig {
    pub device: String,
    pub promiscuous: bool,
    pub filter: Option<CaptureFilter>,
}
