use std::fmt;

/// The fixed set of templates the generator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Shared SSL parameters, rendered once from the whole config.
    SslParams,
    /// Per-certificate include, rendered once per `ssl` entry.
    SslDomain,
    /// Virtual host routing, rendered once from the whole config.
    SiteBlock,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] =
        [TemplateId::SslParams, TemplateId::SslDomain, TemplateId::SiteBlock];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::SslParams => "ssl-params",
            TemplateId::SslDomain => "ssl-domain",
            TemplateId::SiteBlock => "site-block",
        }
    }

    /// File name of the embedded template asset.
    pub fn asset_file_name(self) -> &'static str {
        match self {
            TemplateId::SslParams => "ssl-params.conf.j2",
            TemplateId::SslDomain => "ssl-domain.conf.j2",
            TemplateId::SiteBlock => "site-block.conf.j2",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
