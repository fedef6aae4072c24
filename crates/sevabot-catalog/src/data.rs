// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static catalog data: canonical services and their alias table.

/// (canonical name, required documents, charges), in display order.
pub(crate) const SERVICES: &[(&str, &str, &str)] = &[
    (
        "पॅन कार्ड (नवीन/दुरुस्ती)",
        "आधार कार्ड, पॅन कार्ड (दुरुस्तीसाठी), पासपोर्ट साइज फोटो (२)",
        "नवीन ₹170 दुरुस्ती ₹210",
    ),
    (
        "मतदान कार्ड (नवीन/दुरुस्ती)",
        "आधार कार्ड, मतदान कार्ड (दुरुस्तीसाठी), पासपोर्ट साइज फोटो (२)",
        "नवीन ₹70 दुरुस्ती ₹50",
    ),
    (
        "पोलिस मंजुरी प्रमाणपत्र (PCC)",
        "आधार कार्ड, ओळखपत्र (उदा. पॅन कार्ड/ मतदान कार्ड/ ड्रायव्हिंग लायसन्स), जन्म प्रमाणपत्र/शाळा सोडल्याचा दाखला(LC), पासपोर्ट साइज फोटो (२-४), अर्जदाराची स्वाक्षरी, दोन शेजाऱ्यांचे तपशील (नाव, पत्ता, मोबाईल नंबर), नोकरीचे प्रमाणपत्र/नियुक्ती पत्र (आवश्यक असल्यास), मागील पोलिस नोंदी/PCC",
        "₹350",
    ),
    (
        "उत्पन्नाचा दाखला",
        "तलाठी उत्पन्न दाखला, आधार कार्ड, रेशन कार्ड",
        "₹150",
    ),
    (
        "डोमिसाईल / नॅशनलिटी दाखला",
        "स्वतःचा LC, वडिलांचा LC, स्वतःचा आधार कार्ड, वडिलांचा आधार कार्ड, दोन पासपोर्ट फोटो, रेशन कार्ड",
        "₹300",
    ),
    (
        "नॉन क्रिमीलेयर दाखला",
        "तहसीलदार कडील ३ वर्षाचा उत्पन्नाचा दाखला, स्वतःचा जाताचा दाखला, स्वतःचा LC, वडिलांचा LC, स्वतःचा आधार कार्ड, वडिलांचा आधार कार्ड, दोन पासपोर्ट फोटो",
        "₹350",
    ),
    (
        "जातिचा दाखला",
        "स्वतःचा LC/ बोनाफाईड, वडिलांचा LC, आजोबांचा LC, स्वतःचा आधार कार्ड, वडिलांचा आधार कार्ड, रेशन कार्ड, दोन पासपोर्ट फोटो",
        "₹150",
    ),
    (
        "केंद्र शासन जातिचा दाखला",
        "तहसीलदार कडील ३ वर्षाचा उत्पन्नाचा दाखला, स्वतःचा जाताचा दाखला, स्वतःचा LC, वडिलांचा LC, स्वतःचा आधार कार्ड, वडिलांचा आधार कार्ड, रेशन कार्ड, दोन पासपोर्ट फोटो",
        "₹150",
    ),
    (
        "आर्थिकदृष्ट्या दुर्बल प्रमाणपत्र (EWS)",
        "तहसीलदार कडील ३ वर्षाचा उत्पन्नाचा दाखला, स्वतःचा जाताचा दाखला, स्वतःचा LC, वडिलांचा LC, स्वतःचा आधार कार्ड, वडिलांचा आधार कार्ड, रेशन कार्ड, दोन पासपोर्ट फोटो",
        "₹150",
    ),
];

/// Free-text alias -> canonical service name. Aliases are matched after
/// lower-casing, so mixed-case customer input still resolves.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("income certificate", "उत्पन्नाचा दाखला"),
    ("income certi", "उत्पन्नाचा दाखला"),
    ("utpannacha dakhala", "उत्पन्नाचा दाखला"),
    ("utpann dakhala", "उत्पन्नाचा दाखला"),
    ("income proof", "उत्पन्नाचा दाखला"),
    ("domicile", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("domicile certificate", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("domicile certi", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("domocile", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("nationality certificate", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("nationality", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("nationality certi", "डोमिसाईल / नॅशनलिटी दाखला"),
    ("non creamy layer", "नॉन क्रिमीलेयर दाखला"),
    ("non creamy layer certificate", "नॉन क्रिमीलेयर दाखला"),
    ("ncl certificate", "नॉन क्रिमीलेयर दाखला"),
    ("ncl certi", "नॉन क्रिमीलेयर दाखला"),
    ("non creamy", "नॉन क्रिमीलेयर दाखला"),
    ("non crimilier", "नॉन क्रिमीलेयर दाखला"),
    ("non criminal", "नॉन क्रिमीलेयर दाखला"),
    ("caste certificate", "जातिचा दाखला"),
    ("cast certificate", "जातिचा दाखला"),
    ("cast certi", "जातिचा दाखला"),
    ("cast", "जातिचा दाखला"),
    ("jati dakhala", "जातिचा दाखला"),
    ("central caste certificate", "केंद्र शासन जातिचा दाखला"),
    ("central cast certificate", "केंद्र शासन जातिचा दाखला"),
    ("central cast certi", "केंद्र शासन जातिचा दाखला"),
    ("ews certificate", "आर्थिकदृष्ट्या दुर्बल प्रमाणपत्र (EWS)"),
    ("ews certi", "आर्थिकदृष्ट्या दुर्बल प्रमाणपत्र (EWS)"),
    ("ews", "आर्थिकदृष्ट्या दुर्बल प्रमाणपत्र (EWS)"),
    ("ews pramanpatra", "आर्थिकदृष्ट्या दुर्बल प्रमाणपत्र (EWS)"),
    ("pan card", "पॅन कार्ड (नवीन/दुरुस्ती)"),
    ("pan", "पॅन कार्ड (नवीन/दुरुस्ती)"),
    ("pan card certi", "पॅन कार्ड (नवीन/दुरुस्ती)"),
    ("tax card", "पॅन कार्ड (नवीन/दुरुस्ती)"),
    ("voter card", "मतदान कार्ड (नवीन/दुरुस्ती)"),
    ("voter id", "मतदान कार्ड (नवीन/दुरुस्ती)"),
    ("election card", "मतदान कार्ड (नवीन/दुरुस्ती)"),
    ("matdar card", "मतदान कार्ड (नवीन/दुरुस्ती)"),
    ("voting card", "मतदान कार्ड (नवीन/दुरुस्ती)"),
    ("police clearance", "पोलिस मंजुरी प्रमाणपत्र (PCC)"),
    ("pcc", "पोलिस मंजुरी प्रमाणपत्र (PCC)"),
    ("police verification", "पोलिस मंजुरी प्रमाणपत्र (PCC)"),
    ("police certificate", "पोलिस मंजुरी प्रमाणपत्र (PCC)"),
];
