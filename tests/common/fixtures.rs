//! Reusable file contents

pub const APACHE_HEADER: &str = "// SPDX-License-Identifier: Apache-2.0\n";

pub const GO_MAIN: &str = "package main\n";

pub const GO_MAIN_STAMPED: &str = "// SPDX-License-Identifier: Apache-2.0\n\npackage main\n";

pub const GO_WITH_LATE_HEADER: &str =
    "package main\n\n// SPDX-License-Identifier: Apache-2.0\nfunc main() {}\n";
