use {
    auction_engine_api_types::Resource,
    axum::http::Method,
    std::str::FromStr,
};

/// Role claim pre-validated by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Bidder,
    Seller,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "BIDDER" => Ok(Role::Bidder),
            "SELLER" => Ok(Role::Seller),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Principal {
    pub user: String,
    pub role: Role,
}

/// The capability table: which methods a role may use on each resource,
/// evaluated as plain data rather than branching on role strings.
const CAPABILITIES: &[(Role, Resource, &[&str])] = &[
    (Role::Admin, Resource::Auctions, &["GET", "POST", "PUT", "DELETE"]),
    (Role::Admin, Resource::Bids, &["GET", "POST"]),
    (Role::Bidder, Resource::Auctions, &["GET"]),
    (Role::Bidder, Resource::Bids, &["GET", "POST"]),
    (Role::Seller, Resource::Auctions, &["GET"]),
    (Role::Seller, Resource::Bids, &["GET"]),
];

fn resource_for_path(path: &str) -> Option<Resource> {
    if path.starts_with("/v1/auctions") {
        Some(Resource::Auctions)
    } else if path.starts_with("/v1/bids") {
        Some(Resource::Bids)
    } else {
        None
    }
}

pub fn is_allowed(role: Role, path: &str, method: &Method) -> bool {
    let Some(resource) = resource_for_path(path) else {
        return false;
    };
    CAPABILITIES
        .iter()
        .any(|(capability_role, capability_resource, methods)| {
            *capability_role == role
                && *capability_resource == resource
                && methods.contains(&method.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_may_do_everything_the_engine_serves() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            assert!(is_allowed(Role::Admin, "/v1/auctions", &method));
        }
        assert!(is_allowed(Role::Admin, "/v1/bids", &Method::POST));
        assert!(is_allowed(Role::Admin, "/v1/bids/highest", &Method::GET));
    }

    #[test]
    fn bidder_may_place_bids_but_not_mutate_auctions() {
        assert!(is_allowed(Role::Bidder, "/v1/bids", &Method::POST));
        assert!(is_allowed(Role::Bidder, "/v1/bids/winner", &Method::GET));
        assert!(is_allowed(Role::Bidder, "/v1/auctions", &Method::GET));
        assert!(!is_allowed(Role::Bidder, "/v1/auctions", &Method::POST));
        assert!(!is_allowed(Role::Bidder, "/v1/auctions/some-id", &Method::DELETE));
    }

    #[test]
    fn seller_reads_but_never_places_bids() {
        assert!(is_allowed(Role::Seller, "/v1/auctions", &Method::GET));
        assert!(is_allowed(Role::Seller, "/v1/bids/highest", &Method::GET));
        assert!(!is_allowed(Role::Seller, "/v1/bids", &Method::POST));
        assert!(!is_allowed(Role::Seller, "/v1/auctions", &Method::DELETE));
    }

    #[test]
    fn unknown_paths_and_roles_are_denied() {
        assert!(!is_allowed(Role::Admin, "/v1/profiles", &Method::GET));
        assert!("operator".parse::<Role>().is_err());
        assert_eq!("bidder".parse::<Role>(), Ok(Role::Bidder));
    }
}
