error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Io(::std::io::Error);
        Hex(::hex::FromHexError);
        Json(::serde_json::Error);
        Secp256k1(::bitcoin::secp256k1::Error);
    }

    errors {
        InvalidInput(msg: String) {
            description("invalid input")
            display("invalid input: {}", msg)
        }

        InvalidScalar(msg: String) {
            description("invalid private key scalar")
            display("invalid private key scalar: {}", msg)
        }

        ScalarOutOfRange {
            description("private key scalar out of range")
            display("private key scalar is zero or not below the secp256k1 group order")
        }

        InvalidPublicKey(msg: String) {
            description("invalid public key")
            display("invalid public key: {}", msg)
        }
    }
}
