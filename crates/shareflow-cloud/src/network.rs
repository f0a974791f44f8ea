//! Network boundary helpers
//!
//! A Windows file system is reached over a fixed set of TCP ports. The
//! helpers here build the self-referencing security boundary request used
//! when the caller does not bring their own boundary, and describe the
//! reachability of a provisioned file system.

use serde::{Deserialize, Serialize};

/// Ports the file system listens on.
pub const FILE_SYSTEM_PORTS: [u16; 4] = [988, 1021, 1022, 1023];

/// Port range covered by [`NetworkReachability`].
pub const FILE_SYSTEM_PORT_RANGE: (u16, u16) = (988, 1023);

/// Transport protocol for an ingress rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
}

/// Reference to a security boundary, existing or newly created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBoundary {
    pub id: String,
}

impl SecurityBoundary {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One inbound rule in a boundary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRule {
    pub protocol: Protocol,
    pub port: u16,

    /// Allow traffic from members of the boundary itself rather than
    /// from an external source.
    pub self_referencing: bool,
}

/// Request for a new security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityBoundaryRequest {
    pub vpc_id: String,
    pub description: String,
    pub ingress: Vec<IngressRule>,
}

/// Build the default boundary request: inbound TCP on each file system
/// port, allowed from the boundary itself.
pub fn self_referencing_boundary_request(vpc_id: impl Into<String>) -> SecurityBoundaryRequest {
    SecurityBoundaryRequest {
        vpc_id: vpc_id.into(),
        description: "Windows file system access".to_string(),
        ingress: FILE_SYSTEM_PORTS
            .iter()
            .map(|&port| IngressRule {
                protocol: Protocol::Tcp,
                port,
                self_referencing: true,
            })
            .collect(),
    }
}

/// How clients reach a provisioned file system: the TCP port range plus
/// the boundary traffic must originate from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkReachability {
    pub protocol: Protocol,
    pub from_port: u16,
    pub to_port: u16,
    pub boundary: SecurityBoundary,
}

impl NetworkReachability {
    pub fn for_boundary(boundary: SecurityBoundary) -> Self {
        let (from_port, to_port) = FILE_SYSTEM_PORT_RANGE;
        Self {
            protocol: Protocol::Tcp,
            from_port,
            to_port,
            boundary,
        }
    }
}
