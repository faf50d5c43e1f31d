//! Common constants used throughout dappforge.

/// Supported workspace configuration file names
pub const CONFIG_FILES: [&str; 3] = ["dappforge.json", "dappforge.yml", "dappforge.yaml"];

/// Per-bundle ignore file name
pub const IGNORE_FILE: &str = ".templateignore";

/// Patterns that are never materialized, regardless of the bundle ignore file
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", "**/.git/**", IGNORE_FILE];

/// Suffix stripped from materialized file names
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Bundle materialized into every application before the UI variant
pub const BASE_BUNDLE: &str = "base";

/// Workspace dependency manifest
pub const PACKAGE_JSON: &str = "package.json";

/// Per-project configuration file used to register projects
pub const PROJECT_JSON: &str = "project.json";

/// Directory that holds generated applications
pub const APPS_DIR: &str = "apps";

/// Directories never scanned for project registrations
pub const SKIPPED_DIRS: [&str; 3] = ["node_modules", ".git", "dist"];

/// Boilerplate produced by the application skeleton and removed before templating
pub const DEFAULT_APP_FILES: [&str; 4] =
    ["app.module.css", "app.spec.tsx", "app.tsx", "nx-welcome.tsx"];

/// Runtime dependencies of every generated application
pub const APPLICATION_DEPENDENCIES: [(&str, &str); 7] = [
    ("@solana/spl-token", "^0.4.6"),
    ("@solana/web3.js", "^1.91.9"),
    ("@tabler/icons-react", "^3.5.0"),
    ("@tanstack/react-query", "^5.40.0"),
    ("jotai", "^2.8.3"),
    ("react-hot-toast", "^2.4.1"),
    ("react-router-dom", "^6.23.1"),
];

/// Wallet adapter dependencies of every generated application
pub const WALLET_ADAPTER_DEPENDENCIES: [(&str, &str); 4] = [
    ("@solana/wallet-adapter-base", "^0.9.23"),
    ("@solana/wallet-adapter-react", "^0.15.35"),
    ("@solana/wallet-adapter-react-ui", "^0.9.35"),
    ("@solana/wallet-adapter-wallets", "^0.19.32"),
];

/// Client dependency added when a companion program is paired with the application
pub const ANCHOR_CLIENT_DEPENDENCY: (&str, &str) = ("@coral-xyz/anchor", "^0.30.0");

/// Development dependencies added by the tailwind styling step
pub const TAILWIND_DEV_DEPENDENCIES: [(&str, &str); 4] = [
    ("autoprefixer", "10.4.13"),
    ("daisyui", "^4.11.1"),
    ("postcss", "8.4.38"),
    ("tailwindcss", "3.4.3"),
];

/// Directives prepended to the application stylesheet
pub const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// Directory of generated companion programs
pub const ANCHOR_DIR: &str = "anchor";
