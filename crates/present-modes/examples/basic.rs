//! Encrypts a short message with both chaining modes and decrypts it back.

use present_modes::{cbc_decrypt, cbc_encrypt, cfb_decrypt, cfb_encrypt, generate_salt, Present};

fn main() {
    let key = [0u8; 16];
    let salt = generate_salt(8);
    let message = b"TestData";

    let cbc = cbc_encrypt::<Present>(message, &key, &salt).expect("cbc encrypt");
    let cfb = cfb_encrypt::<Present>(message, &key, &salt).expect("cfb encrypt");

    let cbc_plain = cbc_decrypt::<Present>(&cbc.ciphertext, &key, &salt).expect("cbc decrypt");
    let cfb_plain = cfb_decrypt::<Present>(&cfb.ciphertext, &key, &salt).expect("cfb decrypt");
    assert_eq!(cbc_plain.as_bytes(), message);
    assert_eq!(cfb_plain.as_bytes(), message);

    println!("example succeeded; CBC and CFB round trips match");
}
