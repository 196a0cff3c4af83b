/// Base URL for Clearbit's logo API; append a bare domain to get an image URL.
pub const LOGO_BASE_URL: &str = "https://logo.clearbit.com/";

/// Map of tool names to the domains their logos are served from.
///
/// Names must match the heading text of a tool card exactly; a card whose
/// heading is not listed here is left alone.
pub const LOGO_DOMAINS: &[(&str, &str)] = &[
    ("Agent 3000", "agent3000.com"),
    ("Builder's Update", "buildersupdate.com"),
    ("BrokerBay", "brokerbay.com"),
    ("Domus Analytics", "domusanalytics.com"),
    ("ShowingTime+", "showingtimeplus.com"),
    ("Realtor.com Professional", "realtor.com"),
    ("MLS Advantage", "floridarealtors.org"),
    ("RPR", "narrpr.com"),
    ("InfoSparks", "showingtimeplus.com"),
    ("FOREWARN", "forewarn.com"),
    ("Member Portal", "growthzone.com"),
    ("FR Tech Helpline", "floridarealtors.org"),
    ("RentSpree", "rentspree.com"),
    ("CubiCasa", "cubi.casa"),
    ("TrustedOnly", "trustedonly.com"),
    ("Market Reports", "bonitaesterorealtors.com"),
];

/// Look up the logo domain for a tool name (exact match)
pub fn logo_domain(tool_name: &str) -> Option<&'static str> {
    LOGO_DOMAINS
        .iter()
        .find(|(name, _)| *name == tool_name)
        .map(|(_, domain)| *domain)
}
