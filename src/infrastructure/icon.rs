//! Embedded notification icon
//!
//! The icon ships inside the binary as base64 and is materialized to a
//! well-known path under the system temp directory on first use. The file
//! is reused across runs and never cleaned up.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// File name of the materialized icon under the temp directory
pub const ICON_FILE_NAME: &str = "lola.png";

/// Icon materialization errors
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Embedded icon data is corrupt: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to write icon to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Well-known path of the materialized icon
pub fn icon_path() -> PathBuf {
    std::env::temp_dir().join(ICON_FILE_NAME)
}

/// Decode the embedded icon and write it to the well-known temp path,
/// unless a previous run already left it there.
pub async fn ensure_icon() -> Result<PathBuf, IconError> {
    let path = icon_path();
    materialize_at(&path).await?;
    Ok(path)
}

async fn materialize_at(path: &Path) -> Result<(), IconError> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(());
    }

    let bytes = decode_icon()?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn decode_icon() -> Result<Vec<u8>, base64::DecodeError> {
    // The payload keeps the 76-column wrapping of its source; strip it
    // before decoding.
    let data: String = ICON_PNG_BASE64.split_whitespace().collect();
    STANDARD.decode(data)
}

// Output of: cat lola.png | base64
const ICON_PNG_BASE64: &str = "
iVBORw0KGgoAAAANSUhEUgAAAGQAAABkCAYAAABw4pVUAAAAAXNSR0IB2cksfwAAAARnQU1BAACx
jwv8YQUAAAAgY0hSTQAAeiYAAICEAAD6AAAAgOgAAHUwAADqYAAAOpgAABdwnLpRPAAAAAZiS0dE
APwAEwAT7lla1AAAAAlwSFlzAAALEwAACxMBAJqcGAAAAAd0SU1FB+kLCA4YEjTHPQ8AACAASURB
VHja7b1psGXXdd/3W2vvfc6d3vy6+/U8A+jGQIAECBIiBUMkzcmkpVhi0ZYrVjlRJfrgVBI7Trlc
cexSla2oLDmuuMrRFNsSJcuiaFEiKYIEB5AgRWIgpkYDDTTQjZ7H12+80zl775UP58FWlHIZFvEB
aPSquh/eu3Xvh/O/ew3/9V9rC2+wnTrxorty6cxcrzdxOI76e8aDle1Y1VOS9qa33kHSrVrn467o
bB2Pq7O4olubdiuzOpTFv0h1fLjsdgaHbj2ceBuavFFfZGZy/MgPDlw5e/y/HfWv/nddb5NdFbwX
US8ggqhHKXAWyBYwE1xoEU2o8WRf1ubKV8WHPyx73WdF7dv7Dx0+LSJ2A5D/Anv1xMty/Aff+pRU
w18ocn9PmwFThdJG8cHhgiepJ2uBaEHQAsuQU8arIyUwLRhbQUVBCm1yUSDBjcaj0UMJ9/n+sPrd
H/34XxzcAOQ/Y1cuni6PPfr1nxtfPfe/hVzNdlyipTVd7+j4gPcB8QWRArSFOo9TB5pAwKmCQUwC
UlDVRk1BDi3wjuwdo+QY1PpgOTn7T3fetP+R6bmp6gYg/wk39b2v/N5H1s8d//fdut/yjCi9UHhH
4RXvoPAtVNtAGx96+OCxXJOoEK+gDhFBDDQLkjMxGckXZOdJLlBJwZhuqmVyuDbMDy1dW/npj/30
R4fXIyD6w3z42w9+5vbli6981g2WWmG8Tog1kjJmAlog0iYmxTI4dagodR3JGKoeULJBzhlyhTJC
dIwLNd5XQA0W8TYi5FXXot/rBPuJmS29n33hyAv+BiB/5nSsXzr5Hhtc7kpap66GxCph0ZDaYJSw
OqI5gyVSGpPSAGOMuYRJQr0SgseJoAiKgniycyTRBqi6RuuaggxxiGMMqfpHa9dWfvYGIH/Kli6d
6U4U7b8ZqjXieInReJ1sCRXDAy4reZxIVY3khFJhjKjTgJwrkkViqkipRhCceHQj6KMlaEGhSkmi
IKM5UXrohkzXM50Gw19++PPf+MTLz70SbgACnHvp6H1xvf/uPB5i9RoiY3IaYDYiE4k5E2MmRajG
Nf3VNeJoSK7GxNGYFDMpS5NhGRiOjGKqGIqYERS8ZjI1mZoU1yCu0HVjporcmuoWn1u6eOl3Hv/2
Y+8/dvRY520b1EfDoT76pd/7xfUzL/zt3D+Fl2VKEQpt0+p0EN+hcJM4c1hKiBmqQlEGQtEilG2s
KDFf4H1BjjWprljvrzNKCfWBblEwPztBtkxUTyWBjJBixqQgUuLaM9RWxGG0mJw9N0rji+Lka5Ll
offc/8Dzb0VA/lyBMafIeDSYHdeZHIVkGRccHiNlxTsl+0SuMyKKU0cda1x21MM+ISVcgvWqzygl
Tpx4hVNnztBuBVzhKUKg5QOjceTwLTexb99+2qUjY1B4ElAzZjy+hNeW70nLo/7urmayysdT9v2n
v/Xwc6HXffLixSv/bveBg48duPng6LoFJFYj1+q0FgaSMQmYdjGnoB2wFpaFmEcgimoA8YzimOH6
iHanRb8/ZuX8eV46cYrte3ezaWGGhW0zFEWBSePCWmUJSVm5ssbDD36L2267lU1b5rHgyEWBLyDn
EZYGED0qnm4REF/IKBe95FvvSal+TzUc/s2Vayt/H/jl6/eEWDLLKWIJTUrL9XDJSNkT1eNqweII
AQb1gO7kPO2pWc6cPk1aWkJEyTFyYO9OFldXWe/36U60kWCo84RQ0B/2KWjT9iV7t8zx+DcfZMve
gxw8fDN0e7SmPO22EeuIqmHVCBlCFk/ZmmIskRwLLrx6opUru++6BsRMNKu2k0W8gDOHWMKcYC5g
WSizIUQq4Nljx1nYvJcdOw9x4fw5Xjr+Iqvrq1TDEcG1WR2sMbdtkk1bp5mfn0Jzgfclpo5hPaTr
E4du3cuRF46zZcssBWPGdabsBEJo4SQChjMhOCWmIc4lrly7wtXzZzlw8FB/ZXnFT01PxUuXr/j+
oM/i1Yt+x/ad83U9urBr1/70lgYEMct5HJGKJGMqyQQniA84cYwrJfg2i5cvcSWus7DzJq5cHfDN
Rx5ibnqSGFs8/swRqnHFp/7yT5DiiGMnniSmARMtRcqSotdkYISC9ZxpT/R4x913o4ANV7FxIMYA
RYQiowg5eUxSUxMlQ6Owb8c+4iB+7LnHj/z2b/2b37v0ud//3A5XpGJubm4QU/3ZhS0Lfwi8tQER
DKgNq1EznAqOACmAFiyvDPnmk4/jWo7e/BxPnnyW54+foixbXDt6gqXlaxACt996K999+giuGrNt
5xzDuMiZ5Wts3bqTOKxpGfhsWMhIYbTUUaoSkienFqotco7EPEZFIUequoZyktGwQqOyeWaeI888
P//S+fOf+v4zT7P/ps386I+995Xp6d1/5733vv/z14XLGvXXcxwO10Qd6gQH+BxAAillJjZPc99H
f4y1cc3RoydZGxREmebpY6dYq9e5/e5D/MRHP8y2iQlOHXmBR778da6NFrnpjk2cuXKJ2W3bmWy3
ccOAN4+mCp8i6iuyKNVYMTIx9aGooa4pQokzZZyFXAXEdyALo8GAJx77E165eJk9u3fz/vvutkMH
b/ql+x/4S5+/foJ6BldMPpec+1TUMQ4oXIFqJLkhI1djrqRX9PjI/Q9QVQVff/QpDt7+Tj73tS/x
kU9+nN17t3Hsyef56rcfp6rh3KuXsHbNnl0dVi+cYvv+W3DtCUqmaEkFaRVJQiYT6zGiiSrVkA0t
AuMqUfiClB2ZCC6irYKzF89x7OSLhNnZ6r4P3Ld++M5D/3Y4XP796yqob96xx55/qvCEQHSZ2iJJ
RyBGzg5yiTqQyrFeX+PSpTVOvHyE86t9GA05/uJLvP+9d/CsKLk1yfnBBepBRe/ymOl2Gz86j6sD
hw/PoV5I0fDSJAs5gRdIuUKdoL5LNCFaZn29j1IyqlYJbaGuao6dPsGP/8xfe3nfwZu+te/gLb8X
Wv5b99/+kfF1BYj3IX/rK7/5eMJGsbJWJBFtDCIURRdLDVUoZLKOmd7S5sd+7B6+89gRTpx5lS99
/o84fMs+Dt50C1VfeH5zjyd/8F3C5DyVm+S546+wunqOl499kUM338KB/duIFpnozkMFwSBXmagF
o6ExSCNCR5mb30SdYLhurKUaQsH9H/7ID269555P7T5w4FURyddl2gswMzX/yFJ78hXJ5a1dC3RU
EV9g9KAuyAI1Fckc64OaF44c4cKp07z79jt44cxpPvMvP0N3ssNoMGIYE6t1TZjpcvDWm9l57x1s
n56E4YjV/hLaVUai1DaghSfXmapKjFNmaEZnZopNC9vI0eFUKNpjVgcj+msDJorprcNhfY+InLhu
6xCA2+/96Nq5H3zv+yWTt3bTiJY0ZGFtEZySMTKZ8aCGyti9bYbNs7McP7nI/pmt+C4UnUR3uuD4
6Ze59fBh9mzfztRUYG52moXZaYKNyNJjadSnS0E1qskpMxBlhJFEmd28QDHRoz8CzJHNo77L9Izj
hSefYvnF01v2HDjw4+fPnv3Cth07BtctICKSH/z1X7g29AUqTVoq6siSUR8RMSQbLeeZnCiYm9rC
hcvLbF+4nXNnljHtM7Z1tG1MFwvMb9rEVHeGg3v20hbIVc36aAmTyLg2qgiSHDlm1geRubkdTE1v
wlxgnIyEgXqyKd6XqBTc/c77+O73v+Oee+aZHx+NR78APHPdAgIwsWXHc4sXT5FdIntBJaMWKZxr
WrMmBOfwYvSrEaF01ONVnCyztnYF00zbd7hz106mui065QRlf0hKmXE2cg3RjEQgpoJRv2aiNcHW
XduZ6MxQjTIpGSgEDzEnvGZivU6mxeTM3IWPfPyjn7u6uHis1Wrfe90DMjW3+WxZyMiPY8slpRDB
ZRAVonnAkcUxNki+RTlZ0krK1oXdpNxneXWF9f4KayuXqNYus3VuC66IpOywrNTZsTYeM8ojWr02
nelJelObiFKyUlVYnXEa0KwEUUonIFCbMU4Vdf9qZ+eeQz84fNfNvzO7eVu+rmMIwNWzL72EpiuS
q50yMpyUBOcZolQEVNvE5EmqSNmjVU7hUQqJJBsyP7WJeRvgbBtL185zZXkF6V+hdBO0y0kGtPAz
8xyYn8erMBhHqixQV6hlMMHhEBSSkDJIrShG6ROxHk6eOfrUL188M7tn8679//i6B6Q9Mzt2y5PH
x4PFnUrGWcZh1KZECiyVoG0oS7QsyS7gQhtVQ+kS4ypePc712NzdTN5eIwYuebx0yKHTFHqxZtgf
oFLiEURpCsKgZBI4wbCmFQxIzkiKeKdiyc0Mlgf/y7l45rbnn3z2X03NTj+4fc+uN60q8oeSAVXV
wH/ts//n/7786nN/v0hD6WqLlk5QuQlSmGRsLZL2kKKL94pzxuRkh1A4AkrhhJjGkKwp/0nkHEk5
EpNRR4e3ksIEsyE5Vah5siYQaXoxaPNZzXgPHk+qoE5jsmQkdIguUEkmOz+YmJ7655t37vm1g3cc
OvlmBOSHkgEVRSdOTW59NoRuwpXkUFC5gKjHREAddcoMBmP6a0PWV1ZYXl7kyrVLXB2ssDgeMZKA
+DaaHSEFCmtRhh5lt0ur9LTUKNVQzZgaRt4QUghOBLFGAKEGqTbqcU0mos7wakhd46tEqCOhrjuj
laW/e/nMq79y9IkfHLzuXBbAcP3yUe/dWhozY8nIlgntgIhHrCTVmToNWOqv8tyRJxkM1pifnWd2
6wKz83P02m22zs0x1+vgFLAEyRGspNSSnPpoyjgLiC8b95T7kCqUCJaxbORcgrQQMuiwoXFwiDjU
lKAtsmSqWLnR4vkPXuovfv7hL/7xz99273s/O79pJl0XLgvgqW/89tbzz3/vO6PFM/taLuCYQIs5
ap0kuznQwKCqOHHmBMPRGr1WQZGVnI2V/oDLK0tIgG0L8+zatsCOzVuYbE9TaheHIXFMrhLJCsak
hjOzdaSOiDgMRQmYNoAoicQakYxZAeZolxOQlFCAc5nV/jVyKOm7icomJ395cvPkP3vvve++fF0A
AvDFX/rvvzhaOf/xXuFxqY2Gaaw1Q3KToCU1jsvLy5hCp1UyUZaIAD4wFljpL7O0fIULp05x+fQF
9m3fx12H3sHOXTtpdVqMR5E4Fqo8gmKEktBayEkb92hCFoeZ4FMEGRIlkyXgNdB2HZ595ggvnTjG
A+97D/Nz09TmWHcdVp2inXBiYWHL/7Fp8+Zf331gb35LuyyAVnv+ZOwPTTBx6ppfaVpBZUSijeoE
E50WmYIQAtEMFwxRKJKw0J1m5/QUt+/cQxwmrl1Z5smjz/LVR77FXe++l727D9LxjVA7OSVmhxPA
CwnDNmgaErhsOHM4B85BAAqBXhkgVgyGKyA9VKHtMmZKGqR9/TOX/0Xq15888sTRv97utFYOHN5v
b9kT8p3P/sv/5vyLT/6TkMab2qKEEMgqaBHIvkttXcbjgrr2JPGId+ATpSso8JRBqPOQshUge5wL
1GnMaDzi8rVlXnrxJJNFyZ133UpnpotXh4wTiJE0kS02v66oFNEh2WEhIR4sKpoDDgghEMpItEjC
U5mjMiGhqC+J0rIUytXZrXP/cHrz9K/tObin/5Y8IUnHz9N2gziI1BkkK6olSgEojoyzihwjOTty
LhjHzFCgpYKLEfWRwSjhtURjQsiIK9i6eTvb53exuniFC+cuUl2C6V6XmU6PVqtEC8X7ALmhbbIZ
ScEk4wTEecw5MpAtk4dDTBxSeJxTvI4wEqhSEERynBpcuvaLq4tLu5978ug/uu2dty6/5QCpYv+s
82VHcoHkUaPX1Q65EsiGSIXGiGYj0CYnIfhAyoEUjZiGaJ1AW+AS6sY4g6Ad1AJEo9Wdoz05xSAO
WFtbpxqsENQIwdPqtei0SzpeEe/ICLUYRSU4hLEzJHhKSzgKZGOCKzuDIuB9gZnhSHhq6liHug5/
a/HytT0vHn3xH7e7nSd27dlpbxlAtm6/eWl44eqxGOMmp4bTjEqNim8E2BhOIuIN0ZqYh+QUG6mp
eMQ5khkWlZQgSSZJJKqhjHBATjVigjmh7HUh1mCJUU6sr6/ASqTloOXaSGjj2gXmC8QqkssEEZwv
SQmyKVnAUkZqQcyBllRkMiNykwS70dr6J84c7x/qTHZ/Efh/3jKA5JiyxPwFMd6vKjifURdRYkPJ
YygJkYiQSXmIarsJxtmR64QvCgxQU5w4sosYFYhR5xocmHjqJHjvcd4R60Q2h+AhJ1LODFKmrvvE
4TqaMyqZmI1hf4yLwtxMh5mZzbQ603RaJd4MESEJFM4hBhHD1Kjr2knKN69f7v/61//gjz80MT/3
D9/9/ntffNMHdYAv/NP/+WertWu/2vY16iI+NK7BtI36VuPjc8LMqKORcGQpMC3JCphHrI1IQW2J
WhPiFETIKSGqmAayBLAxWEIQsjVqeYu54bmAymoqG6M54k0gg0TIgzFry5eJVSbXxtLKMrUktFRc
CLQ7Hcoi0Op1md+5i7mFbUz2JhkOK8bRMTZebU92P/CBj33wxJv6hABE58i+8csmhlrGa8JcaqgM
dXjnIYNTI1skMaaWSBLBUpMuqxSIQEqR0TDjfIHTAnUOp4GUFckBcMScySmjXvC+oB6PSQIER1CP
ZMNFhyaHI1NOFcxPdnEp03aBHMcsry6ysrLM5fOXOPvMs4xHq0hwVKFDd9su9h66jc279rP7ptsg
VntSyv8A+Jk3/wn5v//eXx2tLH4mpKG2nKBWU4aS7NvE7HHimn4JSk5CzGNqEmOBiOA0NNmZecQF
cJ5kSk4K2ZETxCyYOQzBxEC1UcKnTJWTFe3y+d705Nlk8Wp/fem2OB51XfZzpW+3XLYSS+ZJzpui
0bAYCQ7aHkLO2HjE+tIiK8tLnDp7gZMXrnJueZW1ssvC4dvZsX83t99118Wde3bd98AHHzj5pj4h
ocRGUmMWkbxBg1sDAE4hZUAwM8jgCah61OemXyIOSc1DQjJGRFUQ55AsqDlESmI2omTGKZKyMBpF
BlXud6dnf2fXwf3/fGpu5lh/sJrPnaxZHg74C5/88fbihUu3nztxYn/RbkUV21yN4/ba2D8eDG9t
F6FtYsFyDCV0eps2d+cl6f53JeqYGcSKdQmk3hRLdU2n5cter8Ob3mVlqGowFUGyUIpDkmAO8E1L
V82BGaKG2RgxCNmhUfEacAKmiSSR5BvSsBqPm1+zKBJaIE21rqEgxZIydI9M9Wb/h10Hb3r0rh99
3/9/Mvfv/fwAeHTj9f8xM9OL587Pqsh4OOx3F8+dX+hfOLvNT3S25NEwFshMr9PeMmvaougM9nUn
qytXLj18z3vuPfmmByQl96hR9NE8mS0TE4gZWWsMh8M37iZlcAYYSkZSxmVBqjHqHKZC1kyuEykl
iBGyIEGJlklOSRQMq0BnestT7aL8yMf+2l//cxGDGzqtqxt/rgEXgaffsv2Q16y/tlKMlq+cL0NR
J4MaqJyS1JHFMGoyFdkimUSyyFhh5I3Kj8h+HWkNsbKiLhK1NrWCuEBodwjtNglP1ja1lfRHLUxm
nsZaf24wrssW7mvW6U3WOw/fJxeOP9YUXBJI5hBRRBJIDSYgDgREUkMH5kRVj3DUlL7YGIt2IAFT
BbWG8sDITqnN06+gPbVpaX7H7v/x/R//0HUFxht2QkTElk8fQQ1KaRYEZIxEwiSjkgjeUK1RrXGa
CSkjVdOMirWnv54YrUVskNGxodGhlGQ8Y4SBCas5kbu91Jub/uTE1NS3uQ7tDYshFgNUI4iG+ogL
CpkGJC1odAl1MwKdFKHZDmQIRoHlRJ0hVWOkzmSJpKCkoEQV+pZZx+iU/uc+9JM/+R2uU3vjgvpw
hKTm8SIZdRsUR3JodAiGE2vmC5OSNoY71QyzJoBXsaKONSmDWSAFD+0W2ZeMtKAzM3vl5lvf8SDX
sb2B+0IqRGucZESMnBuOSMVBEjaW/gBCNtl46GDJwDKiCdGE+dQQjAZJDHJo4g+BalA9/Z73PnDm
egZE36gv6vSmD+RclcgQpUaSEevcpK5eQKUJ0JkNEtFBDlguiBaoxVOrYKqIE/BKtuY76gpS9ExN
L1Rc5/bGFYa5eh859RDDDFwIuNzMqKOBOiXITZalopi4pmqXpnpPuaZKQp2MlJqWbJIC50qQEjNP
tzvxmzcAeZ02zpXLmjFRUjKCc83SAByJgKkHEpIygmA5kdOG4C1nsoG6gHNKrpvsC2kW0RgB79vE
Ubx8vQPyhrmssdp07UCLgIhCbuJI0wlR0IC4gDiHCngPwRlOMkrCScZ7adquwkYNo+SNmOOL4tX9
t9xy9MYJeb1ZlvgDpiUp1xSqeBWyANKoS0Sa4A2NOr7pm9eQE+SI0wwpIjmiCDiHqCeKIF5pdduv
3HbPXVduAPL6k6ybXPIN2yuG5YS5TE41qCBOGlA2qm9LNPJoUbw66pywnDHLzWYIVUSVrEIU0uzm
zU/wNrA3DBBfy4KNwAdFXNrQ4SZUpWnlmoBkEmDWdPbUByQbqRpjGQSHEwHTJj3eAExVXayr4dsB
kDckhhz9kz+ayqkuUoqYafNAU0KSoihOFZX/OMthQC1GLYkoNVGqpuGE4ijwWm6ckIxpDRqpq8GV
G4C8HsrETLftu71vGvGlYAritGm5ysbGUQVRUBWcKE4U9QqhqTec96j6ZrrDXAOovVZIKohfFnEP
3wDk9RGLeWZhb1TAe4eogCtAC5w2FXiWRJJEMkNM0RTIORFTTUyZlAQzvyF0UESa73ISUCkRyu9+
+Cc+9eoNQF6nffVX/+5hsdGs2rhZRkNo5JxETGqyxEZ7iyDZ42LAJY9maV7mcVogIthr7VsB5zzB
tynKSdfqtAdvB0DekKA+HF+72/LKtJrgpIXEAtUCNGA0a/6aaj5tpLaN/qqwEkRILhFjQp1sLMQU
sjUxJSbL3W77Id4m9oYAIvjdFjPqPF5Co1jMgvoWzoPliIohAiaRrAbZoZlGKG0J5zJm1qjRs5Cz
o4pGcpZTff1X6G8sIDGcK/wkwSlmjijN7Lg5w6M402ahchayKNk5zHmyZFKMZKkaMFAsNZKfWrSR
mWpw3jl/A5D/Aou5uIdKqIMRvILLiE9kbWh0Z0BqNjEIBSKBbDVJMnhDXbM9Tl4bwElCyopJsz9u
z80Hn327APKGpL0m+Z3qPSkJOW0UdgpJremHm0BuBG+WdaNWySCJrEZWQ1wDgDmHFgXqA847VHI9
MT158QYgr9Me++pvarZB2/uEc4rlDTV5NoS0UUwEoI1oi2RQpwrTjEkm5USMzQJ/M3DqCT5spNCg
quc6vcnBDUBepy1eODFtFntQ4dQIwaGy0a7Nhlgzzi80C5dFDedTk9aK4lBUmvdVtGkjYqhrhm5C
p6xfeOrRlRsx5HVaXVcHUopbYhxTqCK0YaPm8IQNDiuSqV8rJBERXDKUZpQgWZOrRRoRdjQjqhLV
MzU7d2HLrt3cAOT1xhDSpxXreG2okpwFosM5RdWBJXKuCK5pzTZr+qwpHFNuGF42aBVtlItiIM4R
UZNQPPeOd/+I3QDkdVoaj/eLCU4CIg6y/gcaBG1OhCUa4VvW/xArstXgrLkNITW36qCK04AXh9MC
smN1ef1V3kb2Q8WQh//g/9rpQ/tuZwEx3yRODpwXNuTvoIq4gmSBaAXJCrI5omRqTWRniPcNFS8N
sSgbU1FiRZydXfj+2wmQH+qErC0u+Xowbntt7vcwWs0mOW9kaWYCX+ttmIJIbhSlNGHGctNfV3VE
jLgxsp8VsiScFnnbjm1Xb5yQ12HHn3sitKc2b88Wp5p5jo2LWMiQa2Rju89r8sUskZohkSFZBzjN
lNpsBSKnZuWSN5Jr6hJ1nk63d/TCqVPnbwDyOuzgbXfX/ZVLt8c4IudIzorhQAy1hHvtFERDkqEG
SkaJqESURpslpuTYyEvNIItRb+ixVMMLO/bsSzdc1uu0Ag5VqSJgCK4Z5HQCCs451GgKxAwqzUPP
2bCsJGmuOMrQNLKaxRyYerJ4cg5U42p5ZXnVbgDyn7GHvvxZP7h2atL3lw6X2XCJ5n5CVZJK00+X
vFFZgGej4NtoUOUsVJYadfzG/xWaZf5mZBHqnNHgtvfX15Q30e0Fb0qXtXluPhehqFMaJ7GMx5Fj
s7sqZyPlZoo2ETGtyTomSUXSSNRM1OZ+BSORpXnftEY27gHBhGSCL4uyOzkhN07If8K++JUHtw36
qx/7gy//8d859dKT4fadU5s3B2FaCrzPzfV4UZthTd9cYaFikGvMEmaOZEIybSgVEZBGnZLMmmyM
0EhH8WRktPeWm0og3gDkz9iLz78cnn7u2Z9/6BsP/ddP/eDbPg+vsXIm8MA77yJ0PDNlsbF+TxsF
fM5oKhpyMVtTEKpuAJIBQywjllD11LmR/mZp5D8mjhjZfeXS1UPAEzcA+bOAHHulNVipbj114qqf
nNlLmN8CMuC3v/w93nnzDmbb02yabbFr6x5CqLA8ppAJWjqFJcgIUSNpY29iTGsoTcA3PNkFxqmi
in0qgzGRcnJqz8rqtV1PPXnkyF3vvH18A5A/ZcNx7PQmt0zu338vT71wlJltBa8uHuPmD36Ay+uX
ePylk7wrHOTlq8dZXX2ZO2/bw3SYJaQ+ZShwPpOkIpojFCUx9bHksVqayyglkFygdv9x2+iDD355
5vCVe/7X9953/+4rVxZ/ZdOmucENQF6L/q7sjar6G6trS4cuXLrMVSuhO835NMXF1UW6Ow8z2H6Q
Y48/yabZTRxdW6anS6S1yEJvnt3b97FytcKHFnmwgviIRcNlyHGEui7DpORgRKkYJcdqNSW/+/mH
3r00qm4euDj1u9/8yj/59AMfHr/tAfnOw0f81aurH3zl3NGPvfjiE6wsniRlx23vuIXpdos0tY2q
9qzaHFfyDP31NQbthJOrkPocO7fOX9hxK6euRTQK7ZYw0XMsXbkCNmJ6mvLuWgAABwxJREFUqk1/
bcQgzkDHc+zUSxTTC+TeFrxkvv7kY1MH7rvzZ+enJr4OPPK2B+TUyUu7Xen+6rkLZ/fObZ5kpd9i
xCK3bffMTVQU09tAJ6HosnDvu0i+ombA2bMn8FMw6hrfvVKzlicZr/bZP7GZly5dZnm1hUikPewz
0d7C1ZXI7oWt9HsjmF3gyvISg2qdw/v20up0yGm464bLAlozUmTqzjANWB/1GY5WcGkJd+0UuycL
ehnSeJ3MJDvmJujnQM4FN+0/hAWhnzPLI6NqTzGaGSNUdOd2QxfWBotIq+bU5au4osWZpUXOrKyz
qbVOf/Uid9x6gA999CPjlPPf7rb9524AAlS2Nn3uwoV7jr74LLnI3P3eu1g9/Tz1lSXc7DK9UFEW
AQlj1upl5sseDhgMBtSDEZUZQxyjDEyVjFJFNqVut4lzO6j9mHrzHBQ9Rlaye8d2brvlAPNzEza9
eepMTf6VpauXH/noA3+lvgEIMDc7s//pZ5+1C0tXZO/NOzlz/jQPHD7E1uA4+dwz+B3b2Lp9AWxE
twy4kPFE2m3DVR1EStZGIwZphZgzlcuM4pBUCxJ6DGsjOiGOxkg5B+UkW3xxdqps/epMKP5tfzx8
5VN/6a+8LTit1wXI2sraHUuLS2nT7Ly/duEi+2Z6/Mh7buemuWm+MrzGy5cuUcxO0PWKywUFBWUQ
KGuc8zjfRloBNzRiGpEVxllIRY26VSpr1nE4mW6W8CNM4U7und38S3e867a3jeLkdXNZqyv9L4k4
3wptrl24xvz0NNt27+Qbzz7FaHqa5dDj6ZcuMBwImDDsr5GG42ZBvtX0q1VGNkBbSrvbph1atIse
nVaPdnC0g9JrtSlCIJSCK4yyHToTU13H28xeXx3iQzWzaTPF+bN0OrN87ZGj1KnmpjsO8eLZUzxx
8jLv3ruNE9dWqc6d4x037aYeVphzxBwZ5RFRAi4UG3Q7eFFUQtMLMU+qu4jrktVDSCwuX77z1On2
h4B/fwOQP2O9qe54fstcXF0f+Nvf9SO88sJzfP6RVzi4HDh3ZZFtOw7j9yzw0FOPk6pFWrOeXUXJ
ZOpQtErKUOKyY33UR0sBqSgkN80rKxArMArGVYSOMKpWefCPvuPed/+HPv6FL3z5+U984qPHbris
P2XBy6VN87Nf+/CHPswLx15hattu/vKnfoaVq5HLp1bYNLebpbrkbK6JWxf4+ivnuTgxzZ+cfIUT
S9dYXFmiYMh0y2h5I2iBWYloh1EUag+pTNBN1MWIzkTARn2effKZv9Epu49+55Hv/0+XL199W9Dw
r8tH/+5v/dbaT3360/smu9P3L6+OZNOOrTz75ON0NbF7YYILZ19BiWzfvJuWbubm2+5lPWdWYp+P
feKT7Nm5lzwYcPHyOWoRXGsSyS3aZYfeRJuy6+j2HE4yhfc4c5x46QzjERrKVnnu4sXzviwe/df/
6jfWb5yQDYuD8WdCtmfvfset9K9dxkni8B2HmZwsqVbPUgyvMivCbdt2sXfTZs6cOMHhO2+lt2Mr
X37qOF/4wQVOjab48pEz/P7jR/jtb36dFxbP8czpF/nW9x7m6Sef5vz5Ya5GnZXz59do9XaSZJrP
/LsvcPzVU59eXV//B4899kRxI4Zs2N/46U+f/Ne/9hsvu+H6nbfv2c6h/bt54onHefnESe5/4AFm
phzHn3uetqyxejWzow1HHnuC8VDI5STdm/fxysVVTkiHJOu0t3T5oxOnSXGZtLbCPTO7+dh77kun
ri6dev6ll+7wO/dw7dVFdG4ry9G3182ly0vXv9t63WnlH/7WPwsyXv+Z8dLVA13v6RZd1tcqit48
0ws7OXH2NCcvnebue+7g4rnTvPjE0+hYOX16keVVZZTa5KLH1PwC6hzzu/YxKia50B/jpyaZXNhC
bJVukKstL5w9yVKGxUFk6+4d3P/BDw7a7eLrP/nhD3ztxgkBPv/Z3xDrn9/f0fGdW9s1MfeJdeDe
Ww6y5tu8ePosr15I7Lr5Rxi3tnDs4ve57Y73sWuiw4Pf/CaDY6fpTRyhPbmJrXv20fWCXBqypezS
mtrJ/CYlDtbJ1ZhW2Wa4usYoCRdOXuPQ/p3MTpcvVYOlX7qR9m6Y5VoceXsar7YLG9KSgHihFRNl
nfEzW9j94Z8il57HH3uUQdyGzB3k9MppwsIsH3/3Pcy1enz1S1/j3DMXMBNaRZuaEt8V6jM1kmoe
evI5VqvEmYsDVoc99t92J+cunGZ56fzS3/qpn1q9AQjwve99s33+1eP/lXfdnzO70ml3Mo4Bqp6e
elqV0Ck6rIinwnPP4Ts5fPudDOIaj146zfr0DOuTba5cOEt7YYot5TZyJcy1jTPnLlJ4oS1w4coS
FF1yUrZuO8D27k6Wx4kDCzsoe1OTZiYict3zWf8vS6Jwl06WaWMAAAAASUVORK5CYII=";

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn embedded_data_decodes_to_a_png() {
        let bytes = decode_icon().unwrap();
        assert!(bytes.starts_with(&PNG_MAGIC));
    }

    #[test]
    fn icon_path_is_under_temp_dir() {
        let path = icon_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(ICON_FILE_NAME));
    }

    #[tokio::test]
    async fn materialize_writes_the_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ICON_FILE_NAME);

        materialize_at(&path).await.unwrap();
        let written = tokio::fs::read(&path).await.unwrap();
        assert!(written.starts_with(&PNG_MAGIC));

        // A second call leaves the existing file alone.
        materialize_at(&path).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), written);
    }

    #[tokio::test]
    async fn materialize_reuses_a_preexisting_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ICON_FILE_NAME);

        tokio::fs::write(&path, b"placeholder").await.unwrap();
        materialize_at(&path).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"placeholder");
    }
}
