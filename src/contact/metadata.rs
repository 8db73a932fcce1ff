use std::net::IpAddr;

use axum::http::HeaderMap;
use ipnet::IpNet;

/// Address used for rate limiting and logs.
///
/// `X-Forwarded-For` is only trusted when the direct peer is a configured proxy.
/// The list is walked from the right, since entries left of the last proxy hop
/// are whatever the client sent; the first address that isn't a proxy wins.
pub fn client_ip(headers: &HeaderMap, peer: IpAddr, trusted_proxies: &[IpNet]) -> IpAddr {
    let is_proxy = |ip: &IpAddr| trusted_proxies.iter().any(|net| net.contains(ip));

    if !is_proxy(&peer) {
        return peer;
    }

    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| {
            xff.split(',')
                .rev()
                .filter_map(|s| s.trim().parse::<IpAddr>().ok())
                .find(|ip| !is_proxy(ip))
        })
        .unwrap_or(peer)
}
