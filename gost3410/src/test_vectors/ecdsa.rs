//! P-192 known answers

use super::TestVector;
use hex_literal::hex;

/// P-192 key pairs and nonces with their `r` components.
///
/// Adapted from the FIPS 186-2 ECDSA test vectors
/// (P-192, from `SigGen.txt` in `186-2ecdsatestvectors.zip`)
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
///
/// `r = x(k·G) mod n` does not depend on the message or the signing
/// equation, so the published values hold for this scheme too. The
/// published `s` values do not and are omitted.
pub const ECDSA_TEST_VECTORS: &[TestVector; 15] = &[
    TestVector {
        d: &hex!("0017899949d02b55f9556846411cc9de512c6f16ecdeb1c4"),
        q_x: &hex!("14f69738599689f5706ab71343becc886ef1569a2d1137fe"),
        q_y: &hex!("0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763"),
        k: &hex!("0098e9c07e8e6adb97b77d85b0c10a265e11737a89a3e37b"),
        r: &hex!("af1f749e3df6220ff04efd178618a977e0838b1b9dc126e3"),
    },
    TestVector {
        d: &hex!("0064c3a51fb6188170f3cdf12b474a77de4ae0052b84ece8"),
        q_x: &hex!("386afa71afc065019f3d2021ead531ed1d365887122d2d4b"),
        q_y: &hex!("bbfb6e9cdb32c2252015acfb4cfb049b08b4cb279c64928a"),
        k: &hex!("00797552b9abf541c886f93556103b817a46c9aa0e2bc86f"),
        r: &hex!("337be42eebdcedd97678eeaae9d1b231b740a191a293c22a"),
    },
    TestVector {
        d: &hex!("00abd205ef412646907d2e4886b8ffd7d94678bd3818ed54"),
        q_x: &hex!("3b1c19d73b6a4d7a12003530a54ae0f5ba18d75c98a0db95"),
        q_y: &hex!("afb8bd8c94c6e3d5dc050e3641c0fad771557ce97f5f3dba"),
        k: &hex!("00b81567f9e19c4ace373a26337488c1a476b7ee8d8e52bf"),
        r: &hex!("e36d5dbb9560d959814cbd30aa6a405da9652fbd250da9ab"),
    },
    TestVector {
        d: &hex!("0045624e643545c113e4a1993cfac6f23c6e0486c98e14c9"),
        q_x: &hex!("21933e6e8cdcfff62f36c45e83dece1280a888663a34608f"),
        q_y: &hex!("565890e37fdf563595d24524ef1da9aae246892e75a74234"),
        k: &hex!("008df8209daae53a365bdcc8608f597315d43f587859d96a"),
        r: &hex!("1791e503645e53a8304f2a44715942c6aab315b0086f4147"),
    },
    TestVector {
        d: &hex!("00ca3e5b5d69cf028c9ff138b1ee5c28607a6bf9352c6430"),
        q_x: &hex!("4828ad4aff5d87dcca98a341344a462edf277850755c7277"),
        q_y: &hex!("8a1bfc6b7b0424e15454ac198d4d697927f4eaaf9d14d88e"),
        k: &hex!("00964e4a3eac4d2641c2a5c4badd301da54962410a459654"),
        r: &hex!("c438ca66c5d3b19e2bcd26a5c54742435f25ee0e9364b41c"),
    },
    TestVector {
        d: &hex!("0055ace67df2b17f6e9e1b8928ac856ce8d75f6bbaaaed83"),
        q_x: &hex!("2f5d05cbd620145b41d0a1c656d676ead2fc651b3cf71cc2"),
        q_y: &hex!("88d2386cfb812d02a1fa19578a7cd04b356920a2b2e69839"),
        k: &hex!("006ed729e5c2ec9bac7ddfbfe04ea9444c2c77f71455f623"),
        r: &hex!("cde95d12d650102c535fdc1994fc468308b05e2af7af9c14"),
    },
    TestVector {
        d: &hex!("00d185d51f877d3fcc657d18f30cd14570022d0726c0b188"),
        q_x: &hex!("47e8ec5e1edb1d23c04ebfeefd8cb8bf39cd48c348de3ea7"),
        q_y: &hex!("b1167b3a4e2fbe167bbd7b7b06bf1314d58d9e3976ffa47f"),
        k: &hex!("00124c96b0dd589501ba7d5ddfe9c412cf574be10198899b"),
        r: &hex!("539e285389399c785dfc4f3bfccbc825602f443ae0dca3d1"),
    },
    TestVector {
        d: &hex!("007d6fa0b3dacaf022436777ac53c4437c957947c911faab"),
        q_x: &hex!("a4db1303bf13696e26678286e27c166dd87be98cc8be2844"),
        q_y: &hex!("09b4de84bbfa77e049ace272a12d0dd141d363e74ec12511"),
        k: &hex!("00620f584b08d3199f6841fefa4b920659b267271c9b4034"),
        r: &hex!("6818d44aea421701e3f41600c867fb3d3749eadbf33820fa"),
    },
    TestVector {
        d: &hex!("00b5bfd09a8d177513c4bd7d1bd9ac5ccb7c00c63b9841b4"),
        q_x: &hex!("270d7bb9bfab54529240426a08508f1ed90dc7914cdf11f3"),
        q_y: &hex!("c91ed7f2eca39f563757c5b518d9c28d4d41e7bdc0c7f53e"),
        k: &hex!("00dbc3fbf7b320e9bb6bae128ae19f2c67b297ceb9bc697f"),
        r: &hex!("db20f09b69ac79e224258800ebe6cc51a2e12536b69396c8"),
    },
    TestVector {
        d: &hex!("00958e4bbbdd8709a78441485d6f57dee96cc4d98c38ad4f"),
        q_x: &hex!("6a5723e72f6270160f256ddd403c108503388d4320f7926c"),
        q_y: &hex!("f52b0e0e4c8871443cfc0c231e856f6adc2a7c3318a43578"),
        k: &hex!("0045f392d1910760550b34e64d578905c20fb1cc51b29eef"),
        r: &hex!("6505663a952b741c4583e755496740833d5901fc09433963"),
    },
    TestVector {
        d: &hex!("004960533b788b3fad017e610f5ddab750b4bf5a5e9d0964"),
        q_x: &hex!("1c0e4fc6d8f4e7605f2bf57541395f5167d41d8bdd5c4f80"),
        q_y: &hex!("775da73226020bad6ec4df5022a8c61aee064372ba535ae7"),
        k: &hex!("00e93a10b115218fcb2f0413784385e1fc4555b1818f3b3c"),
        r: &hex!("bc540a8f5ea81c6144698f5452556f17da76a52636461d70"),
    },
    TestVector {
        d: &hex!("00cf08df71e8343af55fc20ca9d6ae822f9bbdf5ab7d2113"),
        q_x: &hex!("194e8fdd4b6b84f1955d1919387f96facf6feadd8105d8dd"),
        q_y: &hex!("2eb47a2ed3aac4250be37f9e31d7ff87be4043ac1eac401f"),
        k: &hex!("009758de92827113c0d1ece5ad9ab65d9acf18f74b58ecf6"),
        r: &hex!("0bbd331b5cbcaef2b26e27bdc559d31c62d5c9b6b8979603"),
    },
    TestVector {
        d: &hex!("0027492bdd573a53baafd1575578fdce242e43f2e3537a0b"),
        q_x: &hex!("18b94fc7825bad91b1ca5a69cdf576377ad76965670d3967"),
        q_y: &hex!("0a73253d6df54d5105f0ca2f948d0686706dbd064744f7c3"),
        k: &hex!("00d8966cd03fdb2509193ddeee3b429cab2605e283c98577"),
        r: &hex!("1a813b607c0b4d71e7acdac040eb78b3795e53bc498bae85"),
    },
    TestVector {
        d: &hex!("00066eb1a5e6a42b53fcc82fcf6a601d023127c7b1c779db"),
        q_x: &hex!("3888a94ef288ebe32b4b9b53bf2d3a85b45976583251f0ec"),
        q_y: &hex!("30156d8e0d212a66c071fb2e7b422ef1784a95dacffd9edb"),
        k: &hex!("008c135723cb6a10cbd3e2cde313aee847477e66c4220f47"),
        r: &hex!("37033150afed029fd8390716eac6500223e72154ccff9fee"),
    },
    TestVector {
        d: &hex!("006dfc40880e0c42d2cebcdee255040d18bb99190981f9a9"),
        q_x: &hex!("b11956a29af6984043973e2de46d53d870e04687cae59728"),
        q_y: &hex!("c915f88aa0fa9822762cc4e60df759d189a10c486b901d5e"),
        k: &hex!("009e03961f041fa811ff88c4948bc0a6d867a7fef5f39453"),
        r: &hex!("c459f7bcea050210e3369ac174ba89c823ca1b0d4c0964f6"),
    },
];
