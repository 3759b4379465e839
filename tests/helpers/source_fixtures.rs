//! Shared fixtures for the integration tests.

use once_cell::sync::Lazy;
use prodimo::catalog::CatalogSource;
use prodimo::ide::AnalysisHost;

/// Catalog JSON shared by all integration tests.
pub const CATALOG_JSON: &str = r#"{
    "Mstar":  { "desc": "stellar mass", "type": "real", "default": "1.0", "unit": "Msun", "wiki": ["star.md"] },
    "Teff":   { "desc": "effective temperature", "type": "real", "default": "5770", "unit": "K", "wiki": [] },
    "Rout":   { "desc": null, "type": "real", "default": "100", "unit": "AU", "wiki": ["disk.md", "grid.md"] },
    "dust_to_gas": { "desc": "dust-to-gas mass ratio", "type": "real", "default": "0.01", "unit": "-", "wiki": [] }
}"#;

/// A small but representative parameter file.
pub const PARAM_FILE: &str = "\
--- STELLAR PARAMETERS ---
1.0        ! Mstar : stellar mass
5770       ! Teff
--- DISK STRUCTURE ---
100        ! Rout
0.01       ! dust_to_gas
not a header
--- DUST OPACITIES ---
";

/// A trimmed run transcript covering every outline rule.
pub const LOG_FILE: &str = "\
 ProDiMo started
 INIT_grid: setting up the grid
 INIT_star: stellar parameters
 INIT_HEATCOOL: heating/cooling
 INIT SYS CO ...
 INIT SYS H2O ... 42 levels
 total INIT CPU time = 33.1 s
 CALCULATING MONOCHROMATIC FACE-ON SED ...
 SOLUTION OF CONTINUUM RADIATIVE TRANSFER ...
 total CONTINUUM RT CPU time = 101.0 s
 CHEMISTRY AND ENERGY BALANCE ...
 total CHEMISTRY CPU time = 55.0 s
 Starting line ray-tracing...
";

/// Host shared across tests; the catalog is loaded exactly once.
pub static HOST: Lazy<AnalysisHost> =
    Lazy::new(|| AnalysisHost::new(CatalogSource::Inline(CATALOG_JSON.to_string())));
