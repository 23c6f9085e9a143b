use serde::{Deserialize, Serialize};

/// A CNAME-target substring that identifies a hosting platform known to
/// allow subdomain takeover once the backing resource is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSignature {
    /// Lowercase substring matched against the CNAME target
    /// (e.g. ".s3.amazonaws.com")
    pub pattern: String,

    /// Service label reported in `[TAKEOVER]` lines (e.g. "AWS S3")
    pub service: String,
}

impl ServiceSignature {
    pub fn new(pattern: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            service: service.into(),
        }
    }

    /// The built-in table, in match-precedence order.
    pub fn defaults() -> Vec<ServiceSignature> {
        DEFAULT_SIGNATURES
            .iter()
            .map(|(pattern, service)| ServiceSignature::new(*pattern, *service))
            .collect()
    }
}

/// Built-in takeover signatures. Declaration order is match precedence:
/// the first pattern contained in a target wins.
pub const DEFAULT_SIGNATURES: &[(&str, &str)] = &[
    (".s3.amazonaws.com", "AWS S3"),
    (".s3-website", "AWS S3"),
    (".s3.dualstack", "AWS S3"),
    (".cloudfront.net", "AWS CloudFront"),
    (".elasticbeanstalk.com", "AWS Elastic Beanstalk"),
    (".herokuapp.com", "Heroku"),
    (".herokudns.com", "Heroku"),
    (".wordpress.com", "WordPress"),
    (".pantheonsite.io", "Pantheon"),
    (".github.io", "GitHub Pages"),
    (".gitlab.io", "GitLab Pages"),
    (".surge.sh", "Surge.sh"),
    (".bitbucket.io", "Bitbucket"),
    (".zendesk.com", "Zendesk"),
    (".desk.com", "Desk.com"),
    (".fastly.net", "Fastly"),
    (".feedpress.me", "FeedPress"),
    (".ghost.io", "Ghost"),
    (".helpjuice.com", "Helpjuice"),
    (".helpscoutdocs.com", "HelpScout"),
    (".azurewebsites.net", "Azure"),
    (".cloudapp.azure.com", "Azure"),
    (".cloudapp.net", "Azure"),
    (".trafficmanager.net", "Azure Traffic Manager"),
    (".blob.core.windows.net", "Azure Blob"),
    (".azureedge.net", "Azure CDN"),
    (".azure-api.net", "Azure API Management"),
    (".azurefd.net", "Azure Front Door"),
    (".statuspage.io", "StatusPage"),
    (".uservoice.com", "UserVoice"),
    (".smartling.com", "Smartling"),
    (".tictail.com", "Tictail"),
    (".campaignmonitor.com", "Campaign Monitor"),
    (".createsend.com", "CreateSend"),
    (".acquia-sites.com", "Acquia"),
    (".proposify.biz", "Proposify"),
    (".simplebooklet.com", "Simplebooklet"),
    (".getresponse.com", "GetResponse"),
    (".vend.com", "Vend"),
    (".jetbrains.space", "JetBrains Space"),
    (".myjetbrains.com", "JetBrains"),
    (".netlify.app", "Netlify"),
    (".netlify.com", "Netlify"),
    (".vercel.app", "Vercel"),
    (".now.sh", "Vercel"),
];
