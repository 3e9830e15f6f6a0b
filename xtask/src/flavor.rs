use clap::ValueEnum;
use std::fmt;

/// A JavaScript host the package is built for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ValueEnum)]
pub enum Flavor {
    /// Native ES module loaded by browsers.
    Web,
    /// CommonJS module for Node.js.
    Nodejs,
    /// ES module for bundlers such as webpack.
    Bundler,
    /// Plain script without a module system.
    NoModules,
}

impl Flavor {
    /// Every flavor, in build order.
    pub const ALL: [Flavor; 4] = [
        Flavor::Web,
        Flavor::Nodejs,
        Flavor::Bundler,
        Flavor::NoModules,
    ];

    /// Value passed to `wasm-pack build --target`.
    pub const fn target(self) -> &'static str {
        match self {
            Flavor::Web => "web",
            Flavor::Nodejs => "nodejs",
            Flavor::Bundler => "bundler",
            Flavor::NoModules => "no-modules",
        }
    }

    /// Directory under the output root that holds this flavor.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Flavor::Web => "web",
            Flavor::Nodejs => "node",
            Flavor::Bundler => "bundler",
            Flavor::NoModules => "no-modules",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}
