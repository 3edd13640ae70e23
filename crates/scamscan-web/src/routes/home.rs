//! Landing page.

use super::{ClientIp, IndexTemplate};

/// GET / - Serve the upload and URL forms.
pub async fn index(client_ip: ClientIp) -> IndexTemplate {
    IndexTemplate::new(client_ip)
}
