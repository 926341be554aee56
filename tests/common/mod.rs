// Test utility module for maint-scripts integration tests
#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CIPHER_PREFS: &str = indoc! {r#"
    #include "nsNSSComponent.h"

    static const CipherPref sCipherPrefs[] = {
        { "security.ssl3.ecdhe_ecdsa_aes_128_gcm_sha256",
          TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, true },
        { "security.ssl3.rsa_aes_128_sha", TLS_RSA_WITH_AES_128_CBC_SHA, true },
        { "security.ssl3.rsa_des_ede3_sha", TLS_RSA_WITH_3DES_EDE_CBC_SHA, true },
        { "security.ssl3.rsa_null_sha", TLS_RSA_WITH_NULL_SHA, false },
        { "security.tls13.aes_128_gcm_sha256", TLS_AES_128_GCM_SHA256 },
        { nullptr, 0}
    };
"#};

pub const CIPHER_SUITES: &str = indoc! {"
    /* This list is in preference order. */
    static ssl3CipherSuiteCfg cipherSuites[ssl_V3_SUITES_IMPLEMENTED] = {
       /*      cipher_suite                     policy       enabled   isPresent */
     { TLS_AES_128_GCM_SHA256, SSL_ALLOWED, PR_TRUE, PR_FALSE},
     { TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, SSL_ALLOWED, PR_TRUE, PR_FALSE},
     { TLS_RSA_WITH_NULL_SHA, SSL_ALLOWED, PR_FALSE, PR_FALSE},
     { TLS_RSA_WITH_3DES_EDE_CBC_SHA, SSL_ALLOWED, PR_TRUE, PR_FALSE},
     { TLS_RSA_WITH_AES_128_CBC_SHA, SSL_ALLOWED, PR_TRUE, PR_FALSE},
    };
"};

pub const SECURITY_PREFS: &str = indoc! {r#"
    pref("security.tls.version.min", 3);
    pref("security.ssl3.ecdhe_ecdsa_aes_128_gcm_sha256", true);
    pref("security.ssl3.rsa_aes_128_sha", true);
    pref("security.ssl3.rsa_des_ede3_sha", false);
    pref("security.ssl3.rsa_null_sha", true);
"#};

pub const SSLPROTO_H: &str = indoc! {"
    #define TLS_RSA_WITH_NULL_SHA                   0x0002
    #define TLS_RSA_WITH_3DES_EDE_CBC_SHA           0x000a
    #define TLS_RSA_WITH_AES_128_CBC_SHA            0x002F
    #define TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 0xC02B
    #define TLS_AES_128_GCM_SHA256                  0x1301
"};

pub const TLS1_H: &str = indoc! {r#"
    # define TLS1_CK_RSA_WITH_AES_128_SHA                0x0300002F
    # define TLS1_CK_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 0x0300C02B
    # define TLS1_TXT_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 "ECDHE-ECDSA-AES128-GCM-SHA256"
"#};

pub const SSL3_H: &str = indoc! {r#"
    # define SSL3_CK_RSA_WITH_AES_128_SHA 0x0300002F
    # define TLS1_TXT_RSA_WITH_AES_128_SHA "AES128-SHA"
"#};

/// Expected include file for the default fixture trees
pub const EXPECTED_OUTPUT: &str = indoc! {"
    /* This is an include file used to define the list of ciphers clients should
     * advertise.  Before including it, you should define the CIPHER and XCIPHER
     * macros.
     *
     * This file was automatically generated by get_mozilla_ciphers.py.
     */
    #ifdef TLS1_TXT_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
        CIPHER(0xc02b, TLS1_TXT_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256)
    #else
       XCIPHER(0xc02b, TLS1_TXT_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256)
    #endif
    #ifdef TLS1_TXT_RSA_WITH_AES_128_SHA
        CIPHER(0x002f, TLS1_TXT_RSA_WITH_AES_128_SHA)
    #else
       XCIPHER(0x002f, TLS1_TXT_RSA_WITH_AES_128_SHA)
    #endif
"};

/// Firefox and OpenSSL source trees in a temporary directory
pub struct SourceTrees {
    dir: TempDir,
}

impl SourceTrees {
    /// Trees holding every fixture file above
    pub fn new() -> Self {
        let trees = Self::empty();
        trees.firefox_file("security/manager/ssl/nsNSSComponent.cpp", CIPHER_PREFS);
        trees.firefox_file("security/nss/lib/ssl/ssl3con.c", CIPHER_SUITES);
        trees.firefox_file("netwerk/base/security-prefs.js", SECURITY_PREFS);
        trees.firefox_file("security/nss/lib/ssl/sslproto.h", SSLPROTO_H);
        trees.openssl_header("ssl3.h", SSL3_H);
        trees.openssl_header("tls1.h", TLS1_H);
        trees
    }

    /// Two empty trees
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("firefox")).unwrap();
        fs::create_dir_all(dir.path().join("openssl")).unwrap();
        Self { dir }
    }

    pub fn firefox(&self) -> PathBuf {
        self.dir.path().join("firefox")
    }

    pub fn openssl(&self) -> PathBuf {
        self.dir.path().join("openssl")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn firefox_file(&self, relative: &str, content: &str) {
        write_file(&self.firefox().join(relative), content);
    }

    pub fn openssl_header(&self, name: &str, content: &str) {
        write_file(&self.openssl().join("include/openssl").join(name), content);
    }
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
